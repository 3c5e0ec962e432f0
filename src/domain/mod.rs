//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `user` - Hosts and guests
//! - `caravan` - Listings owned by hosts
//! - `reservation` - Booking lifecycle, validation, availability index
//! - `pricing` - Discount policies and total price computation
//! - `payment` - Checkout records
//! - `review` - Review gate and host rating aggregation

pub mod caravan;
pub mod foundation;
pub mod payment;
pub mod pricing;
pub mod reservation;
pub mod review;
pub mod user;
