//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Classification of business failures.
///
/// Every module error maps to exactly one kind so callers can decide
/// how to present the failure without matching on module-specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller input violates a precondition. Recoverable by correcting input.
    Validation,
    /// Booking conflict or unavailable resource. Recoverable by choosing
    /// alternative dates or caravans.
    Conflict,
    /// Actor lacks permission for the attempted action.
    Authorization,
    /// Referenced entity does not exist.
    NotFound,
    /// Adapter or environment failure, not a business rule.
    Infrastructure,
}

impl ErrorKind {
    /// Returns true for failures a caller can recover from by changing input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ErrorKind::Infrastructure)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Authorization => "AUTHORIZATION",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Infrastructure => "INFRASTRUCTURE",
        };
        write!(f, "{}", s)
    }
}
