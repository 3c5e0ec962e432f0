//! Caravan aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CaravanId, Timestamp, UserId, ValidationError};

use super::CaravanStatus;

/// A caravan listed for rent.
///
/// # Invariants
///
/// - owned by exactly one host (the creator)
/// - `capacity >= 1`, `daily_rate > 0`
/// - capacity and daily rate are immutable after listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caravan {
    id: CaravanId,
    host_id: UserId,
    name: String,
    capacity: u32,
    /// Price per day in minor currency units.
    daily_rate: i64,
    status: CaravanStatus,
    amenities: Vec<String>,
    created_at: Timestamp,
}

impl Caravan {
    /// Creates a new available listing.
    ///
    /// # Errors
    ///
    /// - `EmptyField` when the name is blank
    /// - `OutOfRange` when capacity is zero or the daily rate is not positive
    pub fn new(
        id: CaravanId,
        host_id: UserId,
        name: impl Into<String>,
        capacity: u32,
        daily_rate: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if capacity < 1 {
            return Err(ValidationError::out_of_range(
                "capacity",
                1,
                i64::MAX,
                capacity as i64,
            ));
        }
        if daily_rate <= 0 {
            return Err(ValidationError::out_of_range(
                "daily_rate",
                1,
                i64::MAX,
                daily_rate,
            ));
        }
        Ok(Self {
            id,
            host_id,
            name,
            capacity,
            daily_rate,
            status: CaravanStatus::Available,
            amenities: Vec::new(),
            created_at: Timestamp::now(),
        })
    }

    /// Adds amenities at listing time (builder style).
    pub fn with_amenities(mut self, amenities: Vec<String>) -> Self {
        self.amenities = amenities;
        self
    }

    pub fn id(&self) -> &CaravanId {
        &self.id
    }

    pub fn host_id(&self) -> &UserId {
        &self.host_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn daily_rate(&self) -> i64 {
        self.daily_rate
    }

    pub fn status(&self) -> CaravanStatus {
        self.status
    }

    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true when the given user owns this listing.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.host_id == *user_id
    }

    /// Marks the caravan as held by a confirmed reservation.
    pub fn mark_reserved(&mut self) {
        self.status = CaravanStatus::Reserved;
    }

    /// Returns the caravan to the open market.
    pub fn mark_available(&mut self) {
        self.status = CaravanStatus::Available;
    }

    /// Takes the caravan off the market.
    pub fn mark_maintenance(&mut self) {
        self.status = CaravanStatus::Maintenance;
    }
}
