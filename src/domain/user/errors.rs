//! User-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorKind, UserId, ValidationError};

/// Errors raised by user registration and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UserError {
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("invalid username: {0}")]
    InvalidUsername(#[from] ValidationError),

    #[error("user not found: {0}")]
    NotFound(UserId),

    #[error("user storage failure: {0}")]
    Infrastructure(String),
}

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::UsernameTaken(_) => ErrorKind::Validation,
            UserError::InvalidUsername(_) => ErrorKind::Validation,
            UserError::NotFound(_) => ErrorKind::NotFound,
            UserError::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }
}
