//! Error types for ghgcalc
//!
//! Library errors use `thiserror`. Ports hand back `anyhow` errors, which are
//! folded into [`CalcError::Repository`] at the service boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::{FactorNotFound, RegistryError, UnitError};
use crate::domain::value_objects::ActivityType;

/// Result type alias for ghgcalc operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Rejections raised while validating and normalizing raw activity input.
///
/// Validation errors are never retried and never partially applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Activity type unknown, or not handled by the calculator asked to validate it
    #[error("unsupported activity type '{activity_type}'")]
    UnsupportedActivityType { activity_type: String },

    /// Negative, NaN or infinite amount
    #[error("activity amount must be a non-negative number, got {amount}")]
    InvalidAmount { amount: f64 },

    /// Unknown unit or cross-family conversion
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// A metadata field has the wrong type or is out of range
    #[error("invalid metadata field '{field}': {reason}")]
    InvalidMetadata { field: String, reason: String },
}

impl ValidationError {
    pub(crate) fn metadata(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for ghgcalc operations
#[derive(Error, Debug)]
pub enum CalcError {
    /// Input failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The emission factor belongs to a different activity type than the input
    #[error(
        "emission factor '{factor_id}' is for '{factor_activity_type}' but the input is '{input_activity_type}'"
    )]
    FactorMismatch {
        factor_id: String,
        factor_activity_type: ActivityType,
        input_activity_type: ActivityType,
    },

    /// No usable emission factor
    #[error(transparent)]
    FactorNotFound(#[from] FactorNotFound),

    /// Activity record missing or not visible to the organization
    #[error("activity record '{id}' not found")]
    RecordNotFound { id: String },

    /// Batch request matched nothing
    #[error("no activity records match the batch request")]
    NoActivityRecords,

    /// Calculator registration refused
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by a factor or activity repository
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

impl CalcError {
    /// Returns true for errors caused by the caller's input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(self, CalcError::Validation(_))
    }
}
