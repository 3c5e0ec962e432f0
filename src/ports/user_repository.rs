//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};

/// Persistence contract for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Saves a new user.
    async fn add(&self, user: &User) -> Result<(), UserError>;

    /// Updates an existing user (rating stats after a review).
    ///
    /// # Errors
    ///
    /// - `NotFound` when the user does not exist
    async fn update(&self, user: &User) -> Result<(), UserError>;

    /// Finds a user by id. Returns `None` when absent.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Finds a user by exact username (uniqueness check at registration).
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;
}
