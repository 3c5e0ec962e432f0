//! Payment handlers.

mod process_payment;

pub use process_payment::{ProcessPaymentCommand, ProcessPaymentHandler};
