//! Caravan-specific error types.

use thiserror::Error;

use crate::domain::foundation::{CaravanId, ErrorKind, ValidationError};

/// Errors raised by caravan listing and search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaravanError {
    #[error("only hosts may list caravans")]
    HostRoleRequired,

    #[error("only guests may search caravans")]
    GuestRoleRequired,

    #[error("invalid listing: {0}")]
    InvalidListing(#[from] ValidationError),

    #[error("caravan not found: {0}")]
    NotFound(CaravanId),

    #[error("caravan storage failure: {0}")]
    Infrastructure(String),
}

impl CaravanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CaravanError::HostRoleRequired => ErrorKind::Validation,
            CaravanError::GuestRoleRequired => ErrorKind::Validation,
            CaravanError::InvalidListing(_) => ErrorKind::Validation,
            CaravanError::NotFound(_) => ErrorKind::NotFound,
            CaravanError::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }
}
