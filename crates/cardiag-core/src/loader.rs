//! Loading vehicle records from named resources.

use crate::domain::{LoadError, VehicleRecord};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A decoded record together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRecord {
    /// Resource name the record was requested under.
    pub name: String,

    /// SHA-256 hex digest of the raw resource bytes.
    pub digest: String,

    pub record: VehicleRecord,
}

/// Produces a [`VehicleRecord`] for a resource name.
pub trait RecordLoader {
    fn load(&self, name: &str) -> Result<LoadedRecord, LoadError>;
}

/// Loads JSON records from files under a root directory.
#[derive(Debug, Clone)]
pub struct DirLoader {
    root: PathBuf,
}

impl DirLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RecordLoader for DirLoader {
    fn load(&self, name: &str) -> Result<LoadedRecord, LoadError> {
        let path = self.root.join(name);
        debug!(path = %path.display(), "loading record");

        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                name: name.to_string(),
            },
            _ => LoadError::Io {
                name: name.to_string(),
                source: e,
            },
        })?;

        decode_record(name, &bytes)
    }
}

/// Decode raw JSON bytes into a [`LoadedRecord`].
pub fn decode_record(name: &str, bytes: &[u8]) -> Result<LoadedRecord, LoadError> {
    let record: VehicleRecord =
        serde_json::from_slice(bytes).map_err(|source| LoadError::Decode {
            name: name.to_string(),
            source,
        })?;

    Ok(LoadedRecord {
        name: name.to_string(),
        digest: content_digest(bytes),
        record,
    })
}

fn content_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
