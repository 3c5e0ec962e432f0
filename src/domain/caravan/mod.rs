//! Caravan domain: listings owned by hosts.

mod aggregate;
mod errors;
mod status;

pub use aggregate::Caravan;
pub use errors::CaravanError;
pub use status::CaravanStatus;
