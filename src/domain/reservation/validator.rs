//! Booking request validation.

use crate::domain::caravan::Caravan;
use crate::domain::foundation::{BookingDate, StayPeriod};
use crate::domain::user::User;

use super::ReservationError;

/// Gatekeeper for reservation creation.
///
/// Checks run in order and stop at the first violation:
///
/// 1. the requester must be a guest
/// 2. the dates must be sane (end not before start, not in the past,
///    at least the configured minimum stay)
/// 3. the caravan must be in a bookable status
///
/// The role check comes first even when the dates are also broken:
/// the first violation in this order is the one reported. The fourth
/// check, availability of the date range, needs the reservation store
/// and is performed by the creation handler after these pass. No
/// reservation object is constructed until all four checks succeed.
#[derive(Debug, Clone, Copy)]
pub struct ReservationValidator {
    min_reservation_days: i64,
}

impl ReservationValidator {
    pub fn new(min_reservation_days: i64) -> Self {
        Self {
            min_reservation_days: min_reservation_days.max(1),
        }
    }

    /// Validates role, dates, and caravan status for a booking request,
    /// returning the stay period on success.
    ///
    /// Takes the raw dates so the role check can fire before any date
    /// sanity check. `today` is passed in rather than read from the
    /// clock so callers and tests control the reference date.
    pub fn validate_request(
        &self,
        guest: &User,
        caravan: &Caravan,
        start: BookingDate,
        end: BookingDate,
        today: BookingDate,
    ) -> Result<StayPeriod, ReservationError> {
        if !guest.role().is_guest() {
            return Err(ReservationError::GuestRoleRequired);
        }

        let period = StayPeriod::new(start, end)
            .map_err(|_| ReservationError::EndBeforeStart { start, end })?;
        if period.start() < today {
            return Err(ReservationError::StartDateInPast {
                start: period.start(),
            });
        }
        if period.days() < self.min_reservation_days {
            return Err(ReservationError::StayTooShort {
                days: period.days(),
                min: self.min_reservation_days,
            });
        }

        if !caravan.status().is_bookable() {
            return Err(ReservationError::CaravanNotBookable(*caravan.id()));
        }

        Ok(period)
    }

    pub fn min_reservation_days(&self) -> i64 {
        self.min_reservation_days
    }
}
