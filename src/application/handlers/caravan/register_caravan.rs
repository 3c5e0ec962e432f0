//! RegisterCaravanHandler - hosts listing caravans.

use std::sync::Arc;
use tracing::info;

use crate::domain::caravan::{Caravan, CaravanError};
use crate::domain::foundation::{CaravanId, UserId};
use crate::ports::{CaravanRepository, UserRepository};

/// Command to list a new caravan.
#[derive(Debug, Clone)]
pub struct RegisterCaravanCommand {
    pub host_id: UserId,
    pub name: String,
    pub capacity: u32,
    /// Price per day in minor currency units. Falls back to the
    /// configured default when omitted.
    pub daily_rate: Option<i64>,
    pub amenities: Vec<String>,
}

/// Handler for caravan registration.
pub struct RegisterCaravanHandler {
    users: Arc<dyn UserRepository>,
    caravans: Arc<dyn CaravanRepository>,
    default_daily_rate: i64,
}

impl RegisterCaravanHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        caravans: Arc<dyn CaravanRepository>,
        default_daily_rate: i64,
    ) -> Self {
        Self {
            users,
            caravans,
            default_daily_rate,
        }
    }

    /// Lists a caravan owned by the given host.
    ///
    /// # Errors
    ///
    /// - `HostRoleRequired` when the creator is not a host
    /// - `InvalidListing` for zero capacity, non-positive rate, blank name
    pub async fn handle(&self, cmd: RegisterCaravanCommand) -> Result<Caravan, CaravanError> {
        let host = self
            .users
            .find_by_id(&cmd.host_id)
            .await
            .map_err(|e| CaravanError::Infrastructure(e.to_string()))?
            .ok_or(CaravanError::HostRoleRequired)?;

        if !host.role().is_host() {
            return Err(CaravanError::HostRoleRequired);
        }

        let caravan = Caravan::new(
            CaravanId::new(),
            cmd.host_id,
            cmd.name,
            cmd.capacity,
            cmd.daily_rate.unwrap_or(self.default_daily_rate),
        )?
        .with_amenities(cmd.amenities);
        self.caravans.add(&caravan).await?;

        info!(caravan_id = %caravan.id(), host_id = %cmd.host_id, name = caravan.name(), "caravan listed");
        Ok(caravan)
    }
}
