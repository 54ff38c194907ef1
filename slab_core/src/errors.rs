//! # Error Types
//!
//! Structured error types for slab_core. Every error serializes to JSON with a
//! `type` discriminator and a `details` payload so a transport layer can return
//! it verbatim to a client.
//!
//! ## Propagation
//!
//! - Input problems (`InvalidInput`, `MissingField`, `UnknownBarSize`,
//!   `UnknownSteelGrade`) are raised before any derived quantity is computed.
//! - `InvalidGeometry` aborts the calculation (no meaningful section exists).
//! - `OverReinforced` and `UndefinedRatio` describe conditions that are
//!   reported *inside* a complete result; they exist here so the same
//!   vocabulary can be used in diagnostics and by callers that want a hard
//!   failure.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_in: f64) -> CalcResult<()> {
//!     if spacing_in <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "spacing",
//!             spacing_in.to_string(),
//!             "Spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_spacing(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for slab_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is out of range or otherwise unusable
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Bar designation is not in the bar table
    #[error("Unknown bar size: '{designation}' (expected #3 through #11)")]
    UnknownBarSize { designation: String },

    /// Steel grade name is not recognized
    #[error("Unknown steel grade: '{grade}'")]
    UnknownSteelGrade { grade: String },

    /// The section has no usable effective depth or neutral axis
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// Flexural neutral axis lies at or below the tension steel
    #[error("Over-reinforced section: c = {c_in:.3} in exceeds d = {d_in:.3} in")]
    OverReinforced { c_in: f64, d_in: f64 },

    /// A ratio has a zero denominator
    #[error("Undefined ratio '{ratio}': {reason}")]
    UndefinedRatio { ratio: String, reason: String },

    /// A computed quantity is NaN or infinite
    #[error("Non-finite value for '{field}': {value}")]
    NonFinite { field: String, value: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownBarSize error
    pub fn unknown_bar_size(designation: impl Into<String>) -> Self {
        CalcError::UnknownBarSize {
            designation: designation.into(),
        }
    }

    /// Create an UnknownSteelGrade error
    pub fn unknown_steel_grade(grade: impl Into<String>) -> Self {
        CalcError::UnknownSteelGrade { grade: grade.into() }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Create an UndefinedRatio error
    pub fn undefined_ratio(ratio: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::UndefinedRatio {
            ratio: ratio.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonFinite error
    pub fn non_finite(field: impl Into<String>, value: f64) -> Self {
        CalcError::NonFinite {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error means the request itself was malformed.
    ///
    /// A boundary layer rejects these requests outright; everything else is a
    /// computation failure.
    pub fn is_rejected_request(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::UnknownBarSize { .. }
                | CalcError::UnknownSteelGrade { .. }
                | CalcError::SerializationError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownBarSize { .. } => "UNKNOWN_BAR_SIZE",
            CalcError::UnknownSteelGrade { .. } => "UNKNOWN_STEEL_GRADE",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::OverReinforced { .. } => "OVER_REINFORCED",
            CalcError::UndefinedRatio { .. } => "UNDEFINED_RATIO",
            CalcError::NonFinite { .. } => "NON_FINITE",
            CalcError::FileError { .. } => "FILE_ERROR",
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
