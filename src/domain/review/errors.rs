//! Review-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorKind, ReservationId};

/// Errors raised by the review flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    #[error("reservation {0} has already been reviewed")]
    AlreadyReviewed(ReservationId),

    #[error("rating {0} is outside the allowed range of 1 to 5")]
    RatingOutOfRange(i64),

    #[error("reservation {0} is not completed; reviews unlock on completion")]
    ReservationNotCompleted(ReservationId),

    #[error("only the reservation's guest may review it")]
    NotReservationGuest,

    #[error("reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("review storage failure: {0}")]
    Infrastructure(String),
}

impl ReviewError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReviewError::AlreadyReviewed(_) => ErrorKind::Validation,
            ReviewError::RatingOutOfRange(_) => ErrorKind::Validation,
            ReviewError::ReservationNotCompleted(_) => ErrorKind::Validation,
            ReviewError::NotReservationGuest => ErrorKind::Authorization,
            ReviewError::ReservationNotFound(_) => ErrorKind::NotFound,
            ReviewError::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }
}
