//! Persisted diagnosis artifacts.
//!
//! One `DiagnosisReport` per diagnosed record, written as pretty JSON so the
//! findings can be consumed outside the console.

use crate::batch::RecordDiagnosis;
use crate::finding::Finding;
use crate::pipeline::Outcome;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const REPORT_SCHEMA_VERSION: &str = "1.0";

/// Canonical diagnosis artifact for a single record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisReport {
    pub schema_version: String,
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub record_name: String,
    pub record_digest: String,
    pub outcome: Outcome,
    pub findings: Vec<Finding>,
    pub lines: Vec<String>,
}

impl DiagnosisReport {
    pub fn from_diagnosis(diagnosis: &RecordDiagnosis) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            record_name: diagnosis.name.clone(),
            record_digest: diagnosis.digest.clone(),
            outcome: diagnosis.outcome,
            findings: diagnosis.findings.clone(),
            lines: diagnosis.findings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Artifact path for a record: `<dir>/<record stem>.diagnosis.json`.
pub fn report_path(dir: &Path, record_name: &str) -> PathBuf {
    let stem = Path::new(record_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| record_name.to_string());
    dir.join(format!("{}.diagnosis.json", stem))
}

/// Write a report in pretty JSON format.
pub fn write_report_json(path: &Path, report: &DiagnosisReport) -> Result<()> {
    let content = serde_json::to_string_pretty(report).context("serialize diagnosis report")?;
    std::fs::write(path, content).with_context(|| format!("write {:?}", path))?;
    Ok(())
}
