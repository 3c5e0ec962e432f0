//! Review domain: one review per completed stay, aggregated per host.

mod aggregate;
mod errors;
mod gate;
mod summary;

pub use aggregate::Review;
pub use errors::ReviewError;
pub use gate::ReviewGate;
pub use summary::summarize;
