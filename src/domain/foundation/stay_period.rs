//! Inclusive date range for a stay.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BookingDate, ValidationError};

/// Inclusive `[start, end]` range of booked days.
///
/// # Invariants
///
/// - `end >= start`, enforced at construction
/// - the day count is inclusive on both ends: a one-day stay has
///   `start == end` and `days() == 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayPeriod {
    start: BookingDate,
    end: BookingDate,
}

impl StayPeriod {
    /// Creates a stay period, rejecting ranges where the end precedes
    /// the start.
    pub fn new(start: BookingDate, end: BookingDate) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::invalid_format(
                "stay_period",
                format!("end date {} precedes start date {}", end, start),
            ));
        }
        Ok(Self { start, end })
    }

    /// Returns the first booked day.
    pub fn start(&self) -> BookingDate {
        self.start
    }

    /// Returns the last booked day (inclusive).
    pub fn end(&self) -> BookingDate {
        self.end
    }

    /// Inclusive number of booked days.
    pub fn days(&self) -> i64 {
        self.end.days_since(&self.start) + 1
    }

    /// Iterates every booked day from start to end inclusive.
    pub fn iter_days(&self) -> impl Iterator<Item = BookingDate> + '_ {
        let end = self.end;
        self.start
            .as_naive()
            .iter_days()
            .map(BookingDate::from_naive)
            .take_while(move |d| *d <= end)
    }

    /// Returns true when any day is shared with `other`.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns true when `day` falls inside the period.
    pub fn contains(&self, day: BookingDate) -> bool {
        self.start <= day && day <= self.end
    }
}

impl fmt::Display for StayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.start, self.end)
    }
}
