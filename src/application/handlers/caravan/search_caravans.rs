//! SearchCaravansHandler - guests browsing listings.

use std::sync::Arc;
use tracing::debug;

use crate::domain::caravan::{Caravan, CaravanError};
use crate::domain::foundation::UserId;
use crate::ports::{CaravanRepository, UserRepository};

/// Command to search listings by minimum capacity.
#[derive(Debug, Clone)]
pub struct SearchCaravansCommand {
    pub guest_id: UserId,
    pub min_capacity: u32,
}

/// Handler for caravan search.
pub struct SearchCaravansHandler {
    users: Arc<dyn UserRepository>,
    caravans: Arc<dyn CaravanRepository>,
}

impl SearchCaravansHandler {
    pub fn new(users: Arc<dyn UserRepository>, caravans: Arc<dyn CaravanRepository>) -> Self {
        Self { users, caravans }
    }

    /// Returns caravans with capacity at least `min_capacity`.
    ///
    /// # Errors
    ///
    /// - `GuestRoleRequired` when the requester is not a guest
    pub async fn handle(&self, cmd: SearchCaravansCommand) -> Result<Vec<Caravan>, CaravanError> {
        let guest = self
            .users
            .find_by_id(&cmd.guest_id)
            .await
            .map_err(|e| CaravanError::Infrastructure(e.to_string()))?
            .ok_or(CaravanError::GuestRoleRequired)?;

        if !guest.role().is_guest() {
            return Err(CaravanError::GuestRoleRequired);
        }

        let matches = self.caravans.search_by_capacity(cmd.min_capacity).await?;
        debug!(
            guest_id = %cmd.guest_id,
            min_capacity = cmd.min_capacity,
            matches = matches.len(),
            "caravan search"
        );
        Ok(matches)
    }
}
