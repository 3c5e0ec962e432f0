//! Review repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ReservationId, UserId};
use crate::domain::review::{Review, ReviewError};

/// Persistence contract for reviews.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Saves a new review.
    async fn add(&self, review: &Review) -> Result<(), ReviewError>;

    /// Finds the review for a reservation, if one exists.
    ///
    /// At most one review per reservation can exist; the review gate
    /// checks this before admitting a new one.
    async fn find_by_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<Review>, ReviewError>;

    /// Lists all reviews received by a host, for rating aggregation.
    async fn find_by_host(&self, host_id: &UserId) -> Result<Vec<Review>, ReviewError>;
}
