//! Booking date value object.
//!
//! Reservations operate on whole calendar days; there is no check-in
//! hour in the core. `BookingDate` wraps a `NaiveDate` so the rest of
//! the domain never touches raw chrono types.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single calendar day in a reservation, timezone-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// Creates a booking date from a calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Returns the inner calendar date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the date `days` days after this one.
    ///
    /// Saturates at the calendar boundary rather than wrapping.
    pub fn plus_days(&self, days: u64) -> Self {
        Self(
            self.0
                .checked_add_days(Days::new(days))
                .unwrap_or(NaiveDate::MAX),
        )
    }

    /// Returns the date `days` days before this one.
    pub fn minus_days(&self, days: u64) -> Self {
        Self(
            self.0
                .checked_sub_days(Days::new(days))
                .unwrap_or(NaiveDate::MIN),
        )
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(&self, other: &BookingDate) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
