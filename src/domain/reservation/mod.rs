//! Reservation domain: booking lifecycle, validation, and availability.
//!
//! This is the heart of the marketplace. A booking request flows through
//! the [`ReservationValidator`], gets priced by the pricing module, and is
//! persisted as a Pending [`Reservation`]. The host then drives the status
//! lifecycle (approve/reject/complete); the guest may cancel. The
//! [`AvailabilityIndex`] tracks which days of which caravan are committed.

mod aggregate;
mod availability;
mod errors;
mod status;
mod validator;

pub use aggregate::Reservation;
pub use availability::AvailabilityIndex;
pub use errors::ReservationError;
pub use status::ReservationStatus;
pub use validator::ReservationValidator;
