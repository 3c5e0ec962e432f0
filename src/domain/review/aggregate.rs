//! Review aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Rating, ReservationId, ReviewId, Timestamp, UserId};

/// A guest's review of a completed stay.
///
/// # Invariants
///
/// - at most one review per reservation (enforced by [`super::ReviewGate`])
/// - written by the reservation's guest about the caravan's host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    reservation_id: ReservationId,
    /// The reviewer.
    guest_id: UserId,
    /// The reviewed host.
    host_id: UserId,
    rating: Rating,
    comment: String,
    created_at: Timestamp,
}

impl Review {
    pub fn new(
        id: ReviewId,
        reservation_id: ReservationId,
        guest_id: UserId,
        host_id: UserId,
        rating: Rating,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id,
            reservation_id,
            guest_id,
            host_id,
            rating,
            comment: comment.into(),
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &ReviewId {
        &self.id
    }

    pub fn reservation_id(&self) -> &ReservationId {
        &self.reservation_id
    }

    pub fn guest_id(&self) -> &UserId {
        &self.guest_id
    }

    pub fn host_id(&self) -> &UserId {
        &self.host_id
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
