//! Payment domain: checkout records for confirmed reservations.

mod aggregate;
mod errors;

pub use aggregate::{Payment, PaymentStatus};
pub use errors::PaymentError;
