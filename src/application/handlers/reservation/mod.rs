//! Reservation lifecycle handlers.
//!
//! Creation is guest-initiated; approval, rejection, and completion are
//! host-driven; cancellation belongs to the guest. Authorization rule
//! throughout: only the caravan's host may approve/reject/complete, and
//! only the reservation's guest may cancel or later review.

mod approve_reservation;
mod cancel_reservation;
mod complete_reservation;
mod create_reservation;
mod reject_reservation;

pub use approve_reservation::{ApproveReservationCommand, ApproveReservationHandler};
pub use cancel_reservation::{CancelReservationCommand, CancelReservationHandler};
pub use complete_reservation::{CompleteReservationCommand, CompleteReservationHandler};
pub use create_reservation::{
    CreateReservationCommand, CreateReservationHandler, CreateReservationOutcome,
};
pub use reject_reservation::{RejectReservationCommand, RejectReservationHandler};
