//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod caravan;
pub mod payment;
pub mod reservation;
pub mod review;
pub mod user;

pub use caravan::{
    RegisterCaravanCommand, RegisterCaravanHandler, SearchCaravansCommand, SearchCaravansHandler,
};
pub use payment::{ProcessPaymentCommand, ProcessPaymentHandler};
pub use reservation::{
    ApproveReservationCommand, ApproveReservationHandler, CancelReservationCommand,
    CancelReservationHandler, CompleteReservationCommand, CompleteReservationHandler,
    CreateReservationCommand, CreateReservationHandler, CreateReservationOutcome,
    RejectReservationCommand, RejectReservationHandler,
};
pub use review::{CreateReviewCommand, CreateReviewHandler};
pub use user::{RegisterUserCommand, RegisterUserHandler};
