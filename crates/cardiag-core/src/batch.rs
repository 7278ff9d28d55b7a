//! Batch driver: load and diagnose a list of named records in order.
//!
//! A record that fails to load is logged and skipped; the batch carries on.
//! A broken pipeline contract or a failing reporter aborts the batch.

use crate::domain::{Result, VehicleRecord};
use crate::finding::Finding;
use crate::loader::RecordLoader;
use crate::pipeline::{DiagnosticPipeline, Outcome};
use crate::reporter::{MemoryReporter, Reporter, TeeReporter};
use serde::Serialize;
use tracing::{error, info};

/// Diagnosis of a single record within a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDiagnosis {
    pub name: String,
    pub digest: String,
    pub outcome: Outcome,
    pub findings: Vec<Finding>,
}

/// A record that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub name: String,
    pub error: String,
}

/// Result of a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub diagnosed: Vec<RecordDiagnosis>,
    pub load_failures: Vec<LoadFailure>,
}

impl BatchSummary {
    /// Records that passed every tier.
    pub fn healthy_count(&self) -> usize {
        self.diagnosed
            .iter()
            .filter(|d| d.outcome.is_healthy())
            .count()
    }

    /// Records that failed some tier.
    pub fn flagged_count(&self) -> usize {
        self.diagnosed.len() - self.healthy_count()
    }
}

/// Diagnose one in-memory record, capturing its findings alongside `reporter`.
pub fn diagnose_record(
    pipeline: &DiagnosticPipeline,
    name: &str,
    digest: &str,
    record: &VehicleRecord,
    reporter: &mut dyn Reporter,
) -> Result<RecordDiagnosis> {
    info!("Executing Diagnostics");
    let mut tee = TeeReporter::new(reporter, MemoryReporter::new());
    let outcome = pipeline.run(record, &mut tee)?;
    let (_, mut captured) = tee.into_parts();

    info!(record = %name, outcome = ?outcome, "diagnosis complete");
    Ok(RecordDiagnosis {
        name: name.to_string(),
        digest: digest.to_string(),
        outcome,
        findings: captured.take(),
    })
}

/// Load and diagnose each named record in order.
pub fn diagnose_batch<L: RecordLoader + ?Sized>(
    loader: &L,
    pipeline: &DiagnosticPipeline,
    names: &[String],
    reporter: &mut dyn Reporter,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for name in names {
        info!("Diagnosing car - {}", name);
        let loaded = match loader.load(name) {
            Ok(loaded) => loaded,
            Err(e) => {
                error!(record = %name, error = %e, "failed to load record");
                summary.load_failures.push(LoadFailure {
                    name: name.clone(),
                    error: e.to_string(),
                });
                continue;
            }
        };

        let diagnosis = diagnose_record(
            pipeline,
            &loaded.name,
            &loaded.digest,
            &loaded.record,
            &mut *reporter,
        )?;
        summary.diagnosed.push(diagnosis);
    }

    info!(
        diagnosed = summary.diagnosed.len(),
        healthy = summary.healthy_count(),
        flagged = summary.flagged_count(),
        load_failures = summary.load_failures.len(),
        "batch finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DescriptiveField, LoadError};
    use crate::loader::{decode_record, LoadedRecord};
    use std::collections::HashMap;

    /// Loader backed by an in-memory map of name -> JSON.
    struct MapLoader(HashMap<String, &'static str>);

    impl RecordLoader for MapLoader {
        fn load(&self, name: &str) -> std::result::Result<LoadedRecord, LoadError> {
            let raw = self.0.get(name).ok_or_else(|| LoadError::NotFound {
                name: name.to_string(),
            })?;
            decode_record(name, raw.as_bytes())
        }
    }

    #[test]
    fn test_load_failure_does_not_stop_batch() {
        let mut records = HashMap::new();
        records.insert("no_year.json".to_string(), r#"{"make":"Ford","model":"Focus"}"#);
        let loader = MapLoader(records);

        let names = vec!["missing.json".to_string(), "no_year.json".to_string()];
        let mut reporter = MemoryReporter::new();
        let summary = diagnose_batch(&loader, &DiagnosticPipeline::new(), &names, &mut reporter)
            .expect("batch");

        assert_eq!(summary.load_failures.len(), 1);
        assert_eq!(summary.load_failures[0].name, "missing.json");
        assert_eq!(summary.diagnosed.len(), 1);
        assert_eq!(summary.diagnosed[0].outcome, Outcome::FieldsMissing);
        assert_eq!(summary.flagged_count(), 1);
        assert_eq!(
            reporter.findings(),
            &[Finding::missing_field(DescriptiveField::Year)]
        );
    }

    #[test]
    fn test_diagnosis_captures_findings() {
        let record = VehicleRecord::default();
        let mut sink = MemoryReporter::new();
        let diagnosis = diagnose_record(
            &DiagnosticPipeline::new(),
            "empty.json",
            "digest",
            &record,
            &mut sink,
        )
        .expect("diagnose");

        assert_eq!(diagnosis.findings.len(), 3);
        assert_eq!(diagnosis.findings, sink.findings());
    }

    /// Accepts `remaining` findings, then fails every write.
    struct QuotaReporter {
        remaining: usize,
        accepted: Vec<Finding>,
    }

    impl Reporter for QuotaReporter {
        fn report(&mut self, finding: &Finding) -> std::io::Result<()> {
            if self.remaining == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "stdout closed",
                ));
            }
            self.remaining -= 1;
            self.accepted.push(*finding);
            Ok(())
        }
    }

    /// Counts load requests before delegating.
    struct CountingLoader {
        inner: MapLoader,
        loads: std::cell::Cell<usize>,
    }

    impl RecordLoader for CountingLoader {
        fn load(&self, name: &str) -> std::result::Result<LoadedRecord, LoadError> {
            self.loads.set(self.loads.get() + 1);
            self.inner.load(name)
        }
    }

    #[test]
    fn test_reporter_failure_aborts_batch() {
        let mut records = HashMap::new();
        records.insert("a.json".to_string(), r#"{"make":"Ford","model":"Focus"}"#);
        records.insert("b.json".to_string(), r#"{"make":"Kia","model":"Rio"}"#);
        records.insert("c.json".to_string(), r#"{"make":"Fiat","model":"Uno"}"#);
        let loader = CountingLoader {
            inner: MapLoader(records),
            loads: std::cell::Cell::new(0),
        };

        let names = vec![
            "a.json".to_string(),
            "b.json".to_string(),
            "c.json".to_string(),
        ];
        let mut reporter = QuotaReporter {
            remaining: 1,
            accepted: Vec::new(),
        };
        let err = diagnose_batch(&loader, &DiagnosticPipeline::new(), &names, &mut reporter)
            .unwrap_err();

        assert!(matches!(err, crate::domain::DiagnosticError::Report(_)));
        assert_eq!(loader.loads.get(), 2);
        assert_eq!(
            reporter.accepted,
            vec![Finding::missing_field(DescriptiveField::Year)]
        );
    }
}
