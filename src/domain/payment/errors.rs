//! Payment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorKind, ReservationId};

/// Errors raised by the checkout flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    #[error("payment of {actual} does not match reservation total of {expected}")]
    AmountMismatch { expected: i64, actual: i64 },

    #[error("reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("payment storage failure: {0}")]
    Infrastructure(String),
}

impl PaymentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaymentError::AmountMismatch { .. } => ErrorKind::Validation,
            PaymentError::ReservationNotFound(_) => ErrorKind::NotFound,
            PaymentError::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }
}
