//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CARAVAN_SHARE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use caravan_share::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Minimum stay: {} days", config.booking.min_reservation_days);
//! ```

mod booking;
mod error;
mod logging;

pub use booking::BookingConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Booking policy (minimum stay, default rate)
    #[serde(default)]
    pub booking: BookingConfig,

    /// Logging (filter directive)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CARAVAN_SHARE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CARAVAN_SHARE__BOOKING__MIN_RESERVATION_DAYS=2` -> `booking.min_reservation_days = 2`
    /// - `CARAVAN_SHARE__BOOKING__DEFAULT_DAILY_RATE=80000` -> `booking.default_daily_rate = 80000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CARAVAN_SHARE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.booking.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CARAVAN_SHARE__BOOKING__MIN_RESERVATION_DAYS");
        env::remove_var("CARAVAN_SHARE__BOOKING__DEFAULT_DAILY_RATE");
        env::remove_var("CARAVAN_SHARE__LOGGING__LOG_LEVEL");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.booking.min_reservation_days, 1);
        assert_eq!(config.booking.default_daily_rate, 50_000);
        assert_eq!(config.logging.log_level, "info,caravan_share=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARAVAN_SHARE__BOOKING__MIN_RESERVATION_DAYS", "3");
        env::set_var("CARAVAN_SHARE__BOOKING__DEFAULT_DAILY_RATE", "80000");
        env::set_var("CARAVAN_SHARE__LOGGING__LOG_LEVEL", "warn");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.booking.min_reservation_days, 3);
        assert_eq!(config.booking.default_daily_rate, 80_000);
        assert_eq!(config.logging.log_level, "warn");
    }
}
