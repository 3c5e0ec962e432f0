//! User aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

use super::UserRole;

/// Minimum username length (characters).
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length (characters).
pub const MAX_USERNAME_LENGTH: usize = 20;

/// Aggregated review standing of a host.
///
/// Recomputed from all reviews for the host whenever a new review lands;
/// never incrementally patched, so it is always rebuildable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    /// Arithmetic mean of all ratings, rounded to 2 decimals.
    /// 0.0 when no reviews exist.
    pub average: f64,
    /// Number of reviews received.
    pub count: u32,
}

/// A registered marketplace participant.
///
/// # Invariants
///
/// - `username` is 3-20 characters after trimming
/// - `role` never changes after registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    role: UserRole,
    rating: RatingStats,
    created_at: Timestamp,
}

impl User {
    /// Creates a new user, validating the username.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` when the trimmed username is shorter than 3 or
    ///   longer than 20 characters
    pub fn new(id: UserId, username: impl Into<String>, role: UserRole) -> Result<Self, ValidationError> {
        let username = username.into().trim().to_string();
        let len = username.chars().count();
        if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
            return Err(ValidationError::out_of_range(
                "username",
                MIN_USERNAME_LENGTH as i64,
                MAX_USERNAME_LENGTH as i64,
                len as i64,
            ));
        }
        Ok(Self {
            id,
            username,
            role,
            rating: RatingStats::default(),
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn rating(&self) -> RatingStats {
        self.rating
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Replaces the aggregated review standing.
    ///
    /// Called by the review flow after recomputing the mean over all
    /// reviews for this user.
    pub fn set_rating_stats(&mut self, stats: RatingStats) {
        self.rating = stats;
    }
}
