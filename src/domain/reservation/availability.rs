//! Availability index: which days of which caravan are committed.
//!
//! Derived, rebuildable bookkeeping owned by the reservation store. It is
//! not independently authoritative: the reservations themselves are the
//! source of truth and the index can always be rebuilt from them.

use std::collections::{BTreeMap, HashMap};

use crate::domain::foundation::{BookingDate, CaravanId, ReservationId, StayPeriod};

use super::{Reservation, ReservationError};

/// Per-caravan map of committed days.
///
/// Both Pending and Confirmed reservations occupy their dates; a date is
/// freed only when its reservation is cancelled or rejected. Marking is
/// O(days) per booking; days are discrete and inclusive on both ends.
#[derive(Debug, Default)]
pub struct AvailabilityIndex {
    bookings: HashMap<CaravanId, BTreeMap<BookingDate, ReservationId>>,
    /// Reverse map used to release a reservation's days on cancellation
    /// and to guard against double-recording the same reservation.
    recorded: HashMap<ReservationId, (CaravanId, StayPeriod)>,
}

impl AvailabilityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when every day in the period is free for the caravan,
    /// including when the caravan has no bookings yet.
    pub fn is_available(&self, caravan_id: &CaravanId, period: &StayPeriod) -> bool {
        match self.bookings.get(caravan_id) {
            Some(days) => period.iter_days().all(|day| !days.contains_key(&day)),
            None => true,
        }
    }

    /// Marks every day of the reservation as occupied by it.
    ///
    /// # Errors
    ///
    /// - `DuplicateReservation` when the reservation id was already
    ///   recorded (idempotency guard)
    pub fn record(&mut self, reservation: &Reservation) -> Result<(), ReservationError> {
        if self.recorded.contains_key(reservation.id()) {
            return Err(ReservationError::DuplicateReservation(*reservation.id()));
        }
        let days = self.bookings.entry(*reservation.caravan_id()).or_default();
        for day in reservation.period().iter_days() {
            days.insert(day, *reservation.id());
        }
        self.recorded
            .insert(*reservation.id(), (*reservation.caravan_id(), *reservation.period()));
        Ok(())
    }

    /// Frees every day held by the reservation.
    ///
    /// Idempotent: releasing an unknown or already-released reservation
    /// is a no-op.
    pub fn release(&mut self, reservation_id: &ReservationId) {
        let Some((caravan_id, period)) = self.recorded.remove(reservation_id) else {
            return;
        };
        if let Some(days) = self.bookings.get_mut(&caravan_id) {
            for day in period.iter_days() {
                // Only remove days still owned by this reservation.
                if days.get(&day) == Some(reservation_id) {
                    days.remove(&day);
                }
            }
        }
    }

    /// Number of currently committed days for a caravan.
    pub fn committed_days(&self, caravan_id: &CaravanId) -> usize {
        self.bookings.get(caravan_id).map_or(0, BTreeMap::len)
    }
}
