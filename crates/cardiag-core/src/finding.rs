//! Diagnostic findings and their human-readable lines.

use crate::domain::{Condition, DescriptiveField, DiagnosticError, PartCategory, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single diagnostic finding emitted by the pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    MissingField {
        field: DescriptiveField,
    },
    MissingPart {
        category: PartCategory,
        count: u32,
    },
    DamagedPart {
        category: PartCategory,
        condition: Condition,
    },
    AllPartsWorking,
}

impl Finding {
    pub fn missing_field(field: DescriptiveField) -> Self {
        Finding::MissingField { field }
    }

    /// Build a missing-part finding.
    ///
    /// # Errors
    ///
    /// `DiagnosticError::ContractViolation` when `count` is zero. A correct
    /// inventory analysis never produces one.
    pub fn missing_part(category: PartCategory, count: u32) -> Result<Self> {
        if count == 0 {
            return Err(DiagnosticError::ContractViolation(format!(
                "missing count for {} must be greater than 0",
                category
            )));
        }
        Ok(Finding::MissingPart { category, count })
    }

    pub fn damaged_part(category: PartCategory, condition: Condition) -> Self {
        Finding::DamagedPart {
            category,
            condition,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MissingField { field } => write!(f, "Car is missing {}", field),
            Finding::MissingPart { category, count } => write!(
                f,
                "Missing Part(s) Detected: {} - Count: {}",
                category, count
            ),
            Finding::DamagedPart {
                category,
                condition,
            } => write!(
                f,
                "Damaged Part Detected: {} - Condition: {}",
                category, condition
            ),
            Finding::AllPartsWorking => f.write_str("All parts found to be working"),
        }
    }
}
