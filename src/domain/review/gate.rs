//! Review admission checks.

use crate::domain::foundation::Rating;

use super::{Review, ReviewError};

/// Gate in front of review creation.
///
/// Enforces the one-review-per-reservation invariant and the rating
/// range. It trusts the caller to have verified eligibility first:
/// the reservation must be Completed and the reviewer must be its
/// guest. The create-review handler performs those checks before
/// invoking the gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewGate;

impl ReviewGate {
    pub fn new() -> Self {
        Self
    }

    /// Admits a review request, returning the validated rating.
    ///
    /// # Errors
    ///
    /// - `AlreadyReviewed` when a review exists for the reservation
    /// - `RatingOutOfRange` when the rating is outside 1..=5
    pub fn admit(&self, existing: Option<&Review>, rating: i64) -> Result<Rating, ReviewError> {
        if let Some(review) = existing {
            return Err(ReviewError::AlreadyReviewed(*review.reservation_id()));
        }
        Rating::try_new(rating).map_err(|_| ReviewError::RatingOutOfRange(rating))
    }
}
