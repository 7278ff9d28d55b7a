//! cardiag Core Library
//!
//! Rule-based diagnostics for vehicle records. A run checks, in order and
//! stopping at the first failing tier:
//! - descriptive fields (make, model, year)
//! - part inventory against [`RequirementsTable::STANDARD`]
//! - part condition

pub mod batch;
pub mod domain;
pub mod finding;
pub mod inventory;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod reporter;
pub mod telemetry;

pub use batch::{diagnose_batch, diagnose_record, BatchSummary, LoadFailure, RecordDiagnosis};
pub use domain::{
    Condition, DescriptiveField, DiagnosticError, LoadError, Part, PartCategory, Result,
    UnknownCondition, VehicleRecord,
};
pub use finding::Finding;
pub use inventory::{compute_missing, MissingReport, RequirementsTable};
pub use loader::{decode_record, DirLoader, LoadedRecord, RecordLoader};
pub use pipeline::{DiagnosticPipeline, Outcome};
pub use report::{report_path, write_report_json, DiagnosisReport, REPORT_SCHEMA_VERSION};
pub use reporter::{LineReporter, MemoryReporter, Reporter, TeeReporter};
pub use telemetry::init_tracing;

/// cardiag version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
