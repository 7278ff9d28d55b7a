//! Domain models for cardiag.
//!
//! - `VehicleRecord`: one vehicle under diagnosis
//! - `Part`: a single component with its category and optional condition
//! - `DiagnosticError` / `LoadError`: failures that are not findings

pub mod error;
pub mod vehicle;

pub use error::{DiagnosticError, LoadError, Result};
pub use vehicle::{Condition, DescriptiveField, Part, PartCategory, UnknownCondition, VehicleRecord};
