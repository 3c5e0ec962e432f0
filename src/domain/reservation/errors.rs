//! Reservation-specific error types.

use thiserror::Error;

use crate::domain::foundation::{BookingDate, CaravanId, ErrorKind, ReservationId, UserId};

use super::ReservationStatus;

/// Errors raised by the booking flow and lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReservationError {
    // Validation failures (caller can correct the request)
    #[error("only guests may request reservations")]
    GuestRoleRequired,

    #[error("start date {start} is in the past")]
    StartDateInPast { start: BookingDate },

    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: BookingDate, end: BookingDate },

    #[error("stay of {days} days is below the minimum of {min}")]
    StayTooShort { days: i64, min: i64 },

    // Conflicts (caller should offer alternative dates or caravans)
    #[error("caravan {0} is not currently bookable")]
    CaravanNotBookable(CaravanId),

    #[error("caravan {0} already has a booking in the requested date range")]
    DateRangeTaken(CaravanId),

    #[error("reservation {0} already exists")]
    DuplicateReservation(ReservationId),

    // Authorization
    #[error("actor is not permitted to perform this transition")]
    Forbidden,

    // Lifecycle
    #[error("cannot {action} a reservation in state {from:?}")]
    InvalidState {
        from: ReservationStatus,
        action: &'static str,
    },

    // Lookups
    #[error("reservation not found: {0}")]
    NotFound(ReservationId),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("caravan not found: {0}")]
    CaravanNotFound(CaravanId),

    #[error("reservation storage failure: {0}")]
    Infrastructure(String),
}

impl ReservationError {
    pub fn kind(&self) -> ErrorKind {
        use ReservationError::*;
        match self {
            GuestRoleRequired | StartDateInPast { .. } | EndBeforeStart { .. } | StayTooShort { .. } => {
                ErrorKind::Validation
            }
            CaravanNotBookable(_) | DateRangeTaken(_) | DuplicateReservation(_) => ErrorKind::Conflict,
            Forbidden => ErrorKind::Authorization,
            InvalidState { .. } => ErrorKind::Conflict,
            NotFound(_) | UserNotFound(_) | CaravanNotFound(_) => ErrorKind::NotFound,
            Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }

    /// True for the failures the creation path reports as a declined
    /// outcome instead of an error (soft-failure contract).
    pub fn declines_creation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::Conflict)
    }
}
