//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the CaravanShare domain.

mod booking_date;
mod errors;
mod ids;
mod rating;
mod state_machine;
mod stay_period;
mod timestamp;

pub use booking_date::BookingDate;
pub use errors::{ErrorKind, ValidationError};
pub use ids::{CaravanId, PaymentId, ReservationId, ReviewId, UserId};
pub use rating::Rating;
pub use state_machine::StateMachine;
pub use stay_period::StayPeriod;
pub use timestamp::Timestamp;
