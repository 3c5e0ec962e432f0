//! CreateReviewHandler - guest reviewing a completed stay.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{ReservationId, ReviewId, UserId};
use crate::domain::reservation::ReservationStatus;
use crate::domain::review::{summarize, Review, ReviewError, ReviewGate};
use crate::ports::{CaravanRepository, ReservationRepository, ReviewRepository, UserRepository};

/// Command to review the host of a completed reservation.
#[derive(Debug, Clone)]
pub struct CreateReviewCommand {
    pub guest_id: UserId,
    pub reservation_id: ReservationId,
    pub rating: i64,
    pub comment: String,
}

/// Handler for review creation.
///
/// After storing the review it recomputes the host's rating standing
/// from the full review list, so the stored average never drifts from
/// the underlying data.
pub struct CreateReviewHandler {
    users: Arc<dyn UserRepository>,
    caravans: Arc<dyn CaravanRepository>,
    reservations: Arc<dyn ReservationRepository>,
    reviews: Arc<dyn ReviewRepository>,
    gate: ReviewGate,
}

impl CreateReviewHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        caravans: Arc<dyn CaravanRepository>,
        reservations: Arc<dyn ReservationRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            users,
            caravans,
            reservations,
            reviews,
            gate: ReviewGate::new(),
        }
    }

    /// Creates the review and refreshes the host's rating stats.
    ///
    /// Eligibility checks run in order: the reservation must be
    /// Completed, the reviewer must be its guest, then the gate enforces
    /// single-review and rating range.
    ///
    /// # Errors
    ///
    /// - `ReservationNotCompleted` before completion
    /// - `NotReservationGuest` when the actor did not make the booking
    /// - `AlreadyReviewed` / `RatingOutOfRange` from the gate
    pub async fn handle(&self, cmd: CreateReviewCommand) -> Result<Review, ReviewError> {
        let reservation = self
            .reservations
            .find_by_id(&cmd.reservation_id)
            .await
            .map_err(|e| ReviewError::Infrastructure(e.to_string()))?
            .ok_or(ReviewError::ReservationNotFound(cmd.reservation_id))?;

        if reservation.status() != ReservationStatus::Completed {
            return Err(ReviewError::ReservationNotCompleted(cmd.reservation_id));
        }
        if !reservation.is_booked_by(&cmd.guest_id) {
            return Err(ReviewError::NotReservationGuest);
        }

        let caravan = self
            .caravans
            .find_by_id(reservation.caravan_id())
            .await
            .map_err(|e| ReviewError::Infrastructure(e.to_string()))?
            .ok_or_else(|| {
                ReviewError::Infrastructure(format!(
                    "caravan {} missing for reservation {}",
                    reservation.caravan_id(),
                    cmd.reservation_id
                ))
            })?;

        let existing = self.reviews.find_by_reservation(&cmd.reservation_id).await?;
        let rating = self.gate.admit(existing.as_ref(), cmd.rating)?;

        let review = Review::new(
            ReviewId::new(),
            cmd.reservation_id,
            cmd.guest_id,
            *caravan.host_id(),
            rating,
            cmd.comment,
        );
        self.reviews.add(&review).await?;

        self.refresh_host_rating(caravan.host_id()).await?;

        info!(
            review_id = %review.id(),
            reservation_id = %cmd.reservation_id,
            host_id = %caravan.host_id(),
            rating = rating.value(),
            "review created"
        );
        Ok(review)
    }

    async fn refresh_host_rating(&self, host_id: &UserId) -> Result<(), ReviewError> {
        let all = self.reviews.find_by_host(host_id).await?;
        let stats = summarize(&all);

        let mut host = self
            .users
            .find_by_id(host_id)
            .await
            .map_err(|e| ReviewError::Infrastructure(e.to_string()))?
            .ok_or_else(|| ReviewError::Infrastructure(format!("host {host_id} missing")))?;
        host.set_rating_stats(stats);
        self.users
            .update(&host)
            .await
            .map_err(|e| ReviewError::Infrastructure(e.to_string()))
    }
}
