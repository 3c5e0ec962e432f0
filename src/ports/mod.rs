//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//! Repositories are injected into handlers at construction time; no
//! global state.

mod caravan_repository;
mod notifier;
mod payment_repository;
mod reservation_repository;
mod review_repository;
mod user_repository;

pub use caravan_repository::CaravanRepository;
pub use notifier::{Notifier, NotifierError};
pub use payment_repository::PaymentRepository;
pub use reservation_repository::ReservationRepository;
pub use review_repository::ReviewRepository;
pub use user_repository::UserRepository;
