//! Host rating aggregation.

use crate::domain::user::RatingStats;

use super::Review;

/// Recomputes a host's rating standing from all of their reviews.
///
/// Simple arithmetic mean rounded to 2 decimals; an empty slice resets
/// the standing to zero. Always a full recompute so the stored stats
/// stay rebuildable from the review store.
pub fn summarize(reviews: &[Review]) -> RatingStats {
    if reviews.is_empty() {
        return RatingStats::default();
    }
    let sum: u32 = reviews.iter().map(|r| r.rating().value() as u32).sum();
    let raw = sum as f64 / reviews.len() as f64;
    RatingStats {
        average: (raw * 100.0).round() / 100.0,
        count: reviews.len() as u32,
    }
}
