//! Caravan repository port.

use async_trait::async_trait;

use crate::domain::caravan::{Caravan, CaravanError};
use crate::domain::foundation::CaravanId;

/// Persistence contract for caravan listings.
#[async_trait]
pub trait CaravanRepository: Send + Sync {
    /// Saves a new listing.
    async fn add(&self, caravan: &Caravan) -> Result<(), CaravanError>;

    /// Updates an existing listing (status flips around confirmations).
    ///
    /// # Errors
    ///
    /// - `NotFound` when the caravan does not exist
    async fn update(&self, caravan: &Caravan) -> Result<(), CaravanError>;

    /// Finds a caravan by id. Returns `None` when absent.
    async fn find_by_id(&self, id: &CaravanId) -> Result<Option<Caravan>, CaravanError>;

    /// Lists caravans whose capacity is at least `min_capacity`.
    async fn search_by_capacity(&self, min_capacity: u32) -> Result<Vec<Caravan>, CaravanError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caravan_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CaravanRepository) {}
    }
}
