//! # Error Types
//!
//! Structured error types for aisc_core. Every failure surfaces to the caller
//! unmodified: the engine performs no local recovery, and retrying a pure
//! calculation changes nothing.
//!
//! ## Example
//!
//! ```rust
//! use aisc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_mm: f64) -> CalcResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "unbraced_length",
//!             length_mm.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::Dimension;

/// Result type alias for aisc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Two quantities of incompatible physical dimension were combined or compared
    #[error("Dimension mismatch in {operation}: {left} vs {right}")]
    DimensionMismatch {
        operation: String,
        left: Dimension,
        right: Dimension,
    },

    /// A limit state with no implemented formula was requested
    #[error("Not implemented: {feature}")]
    NotImplemented { feature: String },

    /// A formula-selection key is outside its enumerated table
    #[error("Missing key '{key}' in table '{table}'")]
    MissingTableKey { table: String, key: String },

    /// An input value is invalid (non-positive, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a DimensionMismatch error
    pub fn dimension_mismatch(operation: impl Into<String>, left: Dimension, right: Dimension) -> Self {
        CalcError::DimensionMismatch {
            operation: operation.into(),
            left,
            right,
        }
    }

    /// Create a NotImplemented error
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        CalcError::NotImplemented {
            feature: feature.into(),
        }
    }

    /// Create a MissingTableKey error
    pub fn missing_table_key(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::MissingTableKey {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            CalcError::NotImplemented { .. } => "NOT_IMPLEMENTED",
            CalcError::MissingTableKey { .. } => "MISSING_TABLE_KEY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
