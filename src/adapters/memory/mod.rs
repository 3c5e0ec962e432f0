//! In-memory repository adapters.
//!
//! Thread-safe via internal `Mutex`, matching the single-writer-per-
//! aggregate model: each operation takes the whole store lock for its
//! duration, so the availability check and the availability record are
//! one atomic step. Suitable for tests, demos, and single-process
//! deployments; a persistent backend would implement the same ports.

mod caravan_repository;
mod payment_repository;
mod reservation_repository;
mod review_repository;
mod user_repository;

pub use caravan_repository::InMemoryCaravanRepository;
pub use payment_repository::InMemoryPaymentRepository;
pub use reservation_repository::InMemoryReservationRepository;
pub use review_repository::InMemoryReviewRepository;
pub use user_repository::InMemoryUserRepository;
