//! CaravanShare - Peer-to-Peer Caravan Rental Marketplace
//!
//! This crate implements the reservation lifecycle and pricing core of a
//! caravan rental marketplace: hosts list caravans, guests book them for
//! inclusive date ranges, hosts drive the approval lifecycle, and
//! completed stays unlock payments and reviews.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
