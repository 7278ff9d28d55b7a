//! Error taxonomy for cardiag.
//!
//! Diagnostic findings (missing fields, missing or damaged parts) are NOT
//! errors; they are the output of a run and travel through a
//! [`Reporter`](crate::reporter::Reporter). The types here cover broken
//! caller contracts, reporter I/O and record loading.

/// Errors that halt a diagnostic run.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticError {
    /// An internal invariant was broken, e.g. a missing-part message with a
    /// zero count. Never caused by record data.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    #[error("failed to emit diagnostic line: {0}")]
    Report(#[from] std::io::Error),
}

/// Errors produced while loading a record.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("record not found: {name}")]
    NotFound { name: String },

    #[error("failed to read record {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode record {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Name of the record the failure refers to.
    pub fn record_name(&self) -> &str {
        match self {
            LoadError::NotFound { name }
            | LoadError::Io { name, .. }
            | LoadError::Decode { name, .. } => name,
        }
    }
}

/// Result type for diagnostic runs.
pub type Result<T> = std::result::Result<T, DiagnosticError>;
