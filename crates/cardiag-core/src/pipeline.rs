//! Tiered diagnostic pipeline.
//!
//! A run walks three tiers in order and stops at the first one that fails:
//!
//! 1. descriptive fields: one finding per absent make, model or year
//! 2. inventory: one finding per category short of the requirements table
//! 3. condition: a finding for the FIRST damaged part only, otherwise a
//!    single "all parts working" confirmation
//!
//! Parts with an unknown condition never fail tier 3.

use crate::domain::{Result, VehicleRecord};
use crate::finding::Finding;
use crate::inventory::RequirementsTable;
use crate::reporter::Reporter;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which tier ended a diagnostic run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Tier 1 failed: one or more descriptive fields absent.
    FieldsMissing,
    /// Tier 2 failed: the inventory is incomplete.
    PartsMissing,
    /// Tier 3 failed: a part is not in working condition.
    PartDamaged,
    /// All tiers passed.
    Healthy,
}

impl Outcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Outcome::Healthy)
    }
}

/// Runs the three diagnostic tiers against a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticPipeline {
    requirements: RequirementsTable,
}

impl DiagnosticPipeline {
    /// Pipeline using [`RequirementsTable::STANDARD`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requirements(requirements: RequirementsTable) -> Self {
        Self { requirements }
    }

    pub fn requirements(&self) -> &RequirementsTable {
        &self.requirements
    }

    /// Diagnose `record`, appending findings to `reporter`.
    ///
    /// # Errors
    ///
    /// - `DiagnosticError::ContractViolation` if the inventory analysis hands
    ///   back a non-positive count.
    /// - `DiagnosticError::Report` if the reporter fails to write.
    pub fn run(&self, record: &VehicleRecord, reporter: &mut dyn Reporter) -> Result<Outcome> {
        debug!(tier = "fields", "checking descriptive fields");
        let missing_fields = record.missing_fields();
        if !missing_fields.is_empty() {
            for field in missing_fields {
                reporter.report(&Finding::missing_field(field))?;
            }
            return Ok(Outcome::FieldsMissing);
        }

        debug!(tier = "inventory", parts = record.parts.len(), "checking part inventory");
        let missing = self.requirements.missing(&record.parts);
        if !missing.is_empty() {
            for (category, count) in missing.iter() {
                reporter.report(&Finding::missing_part(category, count)?)?;
            }
            return Ok(Outcome::PartsMissing);
        }

        debug!(tier = "condition", "checking part condition");
        let damaged = record
            .parts
            .iter()
            .find_map(|part| match part.condition {
                Some(condition) if !condition.is_operational() => Some((part.category, condition)),
                _ => None,
            });

        match damaged {
            Some((category, condition)) => {
                reporter.report(&Finding::damaged_part(category, condition))?;
                Ok(Outcome::PartDamaged)
            }
            None => {
                reporter.report(&Finding::AllPartsWorking)?;
                Ok(Outcome::Healthy)
            }
        }
    }
}
