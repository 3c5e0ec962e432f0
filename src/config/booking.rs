//! Booking policy configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Booking policy knobs
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Shortest allowed stay, in inclusive days
    #[serde(default = "default_min_reservation_days")]
    pub min_reservation_days: i64,

    /// Daily rate applied to listings that do not specify one, in minor
    /// currency units
    #[serde(default = "default_daily_rate")]
    pub default_daily_rate: i64,
}

impl BookingConfig {
    /// Validate booking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_reservation_days < 1 {
            return Err(ValidationError::InvalidMinReservationDays);
        }
        if self.default_daily_rate <= 0 {
            return Err(ValidationError::InvalidDefaultDailyRate);
        }
        Ok(())
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            min_reservation_days: default_min_reservation_days(),
            default_daily_rate: default_daily_rate(),
        }
    }
}

fn default_min_reservation_days() -> i64 {
    1
}

fn default_daily_rate() -> i64 {
    50_000
}
