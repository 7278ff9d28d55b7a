//! Vehicle record, parts and their enumerated categories and conditions.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Functional class of a vehicle part.
///
/// Declaration order is the order used when reporting missing parts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartCategory {
    Engine,
    Electrical,
    FuelFilter,
    OilFilter,
    Tire,
}

impl PartCategory {
    pub const ALL: [PartCategory; 5] = [
        PartCategory::Engine,
        PartCategory::Electrical,
        PartCategory::FuelFilter,
        PartCategory::OilFilter,
        PartCategory::Tire,
    ];

    /// Wire and display label, e.g. `FUEL_FILTER`.
    pub fn label(&self) -> &'static str {
        match self {
            PartCategory::Engine => "ENGINE",
            PartCategory::Electrical => "ELECTRICAL",
            PartCategory::FuelFilter => "FUEL_FILTER",
            PartCategory::OilFilter => "OIL_FILTER",
            PartCategory::Tire => "TIRE",
        }
    }
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wear or damage state of a part.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    New,
    Good,
    Worn,
    Used,
    Damaged,
    Cracked,
    Rusted,
    Broken,
    Flat,
    Scratched,
}

impl Condition {
    pub const ALL: [Condition; 10] = [
        Condition::New,
        Condition::Good,
        Condition::Worn,
        Condition::Used,
        Condition::Damaged,
        Condition::Cracked,
        Condition::Rusted,
        Condition::Broken,
        Condition::Flat,
        Condition::Scratched,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "NEW",
            Condition::Good => "GOOD",
            Condition::Worn => "WORN",
            Condition::Used => "USED",
            Condition::Damaged => "DAMAGED",
            Condition::Cracked => "CRACKED",
            Condition::Rusted => "RUSTED",
            Condition::Broken => "BROKEN",
            Condition::Flat => "FLAT",
            Condition::Scratched => "SCRATCHED",
        }
    }

    /// Whether a part in this condition is still in working order.
    pub fn is_operational(&self) -> bool {
        matches!(self, Condition::New | Condition::Good | Condition::Worn)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a condition label is not one of [`Condition::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised condition label: {0}")]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

/// One physical part of a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    #[serde(rename = "type")]
    pub category: PartCategory,

    /// `None` when the condition is unknown, including unrecognised labels.
    #[serde(
        default,
        deserialize_with = "lenient_condition",
        skip_serializing_if = "Option::is_none"
    )]
    pub condition: Option<Condition>,
}

impl Part {
    pub fn new(category: PartCategory, condition: Condition) -> Self {
        Self {
            category,
            condition: Some(condition),
        }
    }

    /// A part whose condition was not recorded.
    pub fn unknown(category: PartCategory) -> Self {
        Self {
            category,
            condition: None,
        }
    }

    /// True when the condition is absent or one of `NEW`, `GOOD`, `WORN`.
    pub fn is_operational(&self) -> bool {
        self.condition.map_or(true, |c| c.is_operational())
    }
}

/// Maps unrecognised labels to an unknown condition instead of failing the
/// whole record.
fn lenient_condition<'de, D>(deserializer: D) -> Result<Option<Condition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|label| match label.parse::<Condition>() {
        Ok(condition) => Some(condition),
        Err(e) => {
            warn!(label = %label, "{}; treating condition as unknown", e);
            None
        }
    }))
}

/// Scalar accepted for a descriptive field.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextScalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accepts text or a bare number (`"year": 1987`) for descriptive fields,
/// keeping the value as text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<TextScalar> = Option::deserialize(deserializer)?;
    Ok(raw.map(|scalar| match scalar {
        TextScalar::Text(text) => text,
        TextScalar::Integer(n) => n.to_string(),
        TextScalar::Float(n) => n.to_string(),
    }))
}

/// Descriptive fields every record must carry, in the order they are checked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DescriptiveField {
    Make,
    Model,
    Year,
}

impl DescriptiveField {
    pub const ALL: [DescriptiveField; 3] = [
        DescriptiveField::Make,
        DescriptiveField::Model,
        DescriptiveField::Year,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DescriptiveField::Make => "Make",
            DescriptiveField::Model => "Model",
            DescriptiveField::Year => "Year",
        }
    }
}

impl fmt::Display for DescriptiveField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One vehicle under diagnosis.
///
/// Nothing is enforced on construction: absent fields and parts are exactly
/// what the pipeline looks for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleRecord {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub make: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub model: Option<String>,

    #[serde(default)]
    pub parts: Vec<Part>,
}

impl VehicleRecord {
    pub fn new(year: &str, make: &str, model: &str, parts: Vec<Part>) -> Self {
        Self {
            year: Some(year.to_string()),
            make: Some(make.to_string()),
            model: Some(model.to_string()),
            parts,
        }
    }

    /// Value of a descriptive field, if provided.
    pub fn field(&self, field: DescriptiveField) -> Option<&str> {
        match field {
            DescriptiveField::Make => self.make.as_deref(),
            DescriptiveField::Model => self.model.as_deref(),
            DescriptiveField::Year => self.year.as_deref(),
        }
    }

    /// Absent descriptive fields in check order.
    pub fn missing_fields(&self) -> Vec<DescriptiveField> {
        DescriptiveField::ALL
            .into_iter()
            .filter(|f| self.field(*f).is_none())
            .collect()
    }
}
