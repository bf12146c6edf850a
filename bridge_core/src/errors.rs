//! # Error Types
//!
//! Structured error types for bridge_core. Only truly exceptional input
//! problems are errors here: a negative dimension, an enumerator label
//! outside its closed set, a value the caller must supply before anything
//! can be computed.
//!
//! A clause that fails its code minimum is *not* an error. That outcome is
//! carried in [`ClauseResult`](crate::clauses::ClauseResult) so that one
//! failing check never aborts the remaining checks.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm < 0.0 {
//!         return Err(CalcError::invalid_dimension(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Width cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bridge_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for geometry, load and clause operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A geometric input is negative or not a finite number
    #[error("Invalid dimension for '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// An input value is malformed (unknown enumerator label, zero lanes, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required input is absent
    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    /// Selector combination with no matching geometry builder
    #[error("Unhandled variant: {selection} - {reason}")]
    UnhandledVariant { selection: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
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

    /// Create a MissingInput error
    pub fn missing_input(field: impl Into<String>) -> Self {
        CalcError::MissingInput {
            field: field.into(),
        }
    }

    /// Create an UnhandledVariant error
    pub fn unhandled_variant(selection: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::UnhandledVariant {
            selection: selection.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDimension { .. } => "INVALID_DIMENSION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingInput { .. } => "MISSING_INPUT",
            CalcError::UnhandledVariant { .. } => "UNHANDLED_VARIANT",
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

/// Reject negative or non-finite dimensions.
///
/// Fails fast instead of clamping; zero is a valid dimension.
pub fn ensure_dimension(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_dimension(field, value.to_string(), "Dimension must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_dimension(field, value.to_string(), "Dimension cannot be negative"));
    }
    Ok(value)
}
