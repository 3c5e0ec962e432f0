//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports. One handler per operation; handlers own their port
//! dependencies as `Arc<dyn Port>` injected at construction.

pub mod handlers;

pub use handlers::{
    ApproveReservationCommand, ApproveReservationHandler, CancelReservationCommand,
    CancelReservationHandler, CompleteReservationCommand, CompleteReservationHandler,
    CreateReservationCommand, CreateReservationHandler, CreateReservationOutcome,
    CreateReviewCommand, CreateReviewHandler, ProcessPaymentCommand, ProcessPaymentHandler,
    RegisterCaravanCommand, RegisterCaravanHandler, RegisterUserCommand, RegisterUserHandler,
    RejectReservationCommand, RejectReservationHandler, SearchCaravansCommand,
    SearchCaravansHandler,
};
