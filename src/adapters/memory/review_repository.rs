//! In-memory review repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{ReservationId, ReviewId, UserId};
use crate::domain::review::{Review, ReviewError};
use crate::ports::ReviewRepository;

/// In-memory implementation of the review repository.
#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    reviews: Mutex<HashMap<ReviewId, Review>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reviews.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn add(&self, review: &Review) -> Result<(), ReviewError> {
        self.reviews
            .lock()
            .unwrap()
            .insert(*review.id(), review.clone());
        Ok(())
    }

    async fn find_by_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<Review>, ReviewError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .values()
            .find(|r| r.reservation_id() == reservation_id)
            .cloned())
    }

    async fn find_by_host(&self, host_id: &UserId) -> Result<Vec<Review>, ReviewError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.host_id() == host_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Rating;

    fn review(reservation_id: ReservationId, host_id: UserId, rating: i64) -> Review {
        Review::new(
            ReviewId::new(),
            reservation_id,
            UserId::new(),
            host_id,
            Rating::try_new(rating).unwrap(),
            "nice",
        )
    }

    #[tokio::test]
    async fn finds_review_by_reservation() {
        let repo = InMemoryReviewRepository::new();
        let reservation_id = ReservationId::new();
        repo.add(&review(reservation_id, UserId::new(), 5)).await.unwrap();

        assert!(repo.find_by_reservation(&reservation_id).await.unwrap().is_some());
        assert!(repo
            .find_by_reservation(&ReservationId::new())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn collects_all_reviews_for_a_host() {
        let repo = InMemoryReviewRepository::new();
        let host = UserId::new();
        repo.add(&review(ReservationId::new(), host, 5)).await.unwrap();
        repo.add(&review(ReservationId::new(), host, 4)).await.unwrap();
        repo.add(&review(ReservationId::new(), UserId::new(), 1))
            .await
            .unwrap();

        assert_eq!(repo.find_by_host(&host).await.unwrap().len(), 2);
    }
}
