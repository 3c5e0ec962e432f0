//! Adapters - Implementations of the ports.
//!
//! - `memory` - Mutex-guarded in-memory repositories, one conforming
//!   variant among possible persistence backends
//! - `notification` - tracing-based and recording notifiers
//! - `api` - JSON DTOs for the thin boundary layer

pub mod api;
pub mod memory;
pub mod notification;
