//! In-memory reservation repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::domain::foundation::{CaravanId, ReservationId, StayPeriod};
use crate::domain::reservation::{AvailabilityIndex, Reservation, ReservationError};
use crate::ports::ReservationRepository;

#[derive(Debug, Default)]
struct Store {
    reservations: HashMap<ReservationId, Reservation>,
    index: AvailabilityIndex,
}

/// In-memory implementation of the reservation repository.
///
/// Owns the [`AvailabilityIndex`]: inserts and status changes keep the
/// index in sync under one lock, so availability check and record are
/// atomic with respect to each other.
#[derive(Debug, Default)]
pub struct InMemoryReservationRepository {
    store: Mutex<Store>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored reservations (for demos and tests).
    pub fn len(&self) -> usize {
        self.store.lock().unwrap().reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn add(&self, reservation: &Reservation) -> Result<(), ReservationError> {
        let mut store = self.store.lock().unwrap();
        if store.reservations.contains_key(reservation.id()) {
            return Err(ReservationError::DuplicateReservation(*reservation.id()));
        }
        // Re-check under the lock: the validator's availability query and
        // this insert are separate calls, and another booking may have
        // landed in between.
        if !store
            .index
            .is_available(reservation.caravan_id(), reservation.period())
        {
            return Err(ReservationError::DateRangeTaken(*reservation.caravan_id()));
        }
        store.index.record(reservation)?;
        store
            .reservations
            .insert(*reservation.id(), reservation.clone());
        debug!(reservation_id = %reservation.id(), "reservation stored");
        Ok(())
    }

    async fn update(&self, reservation: &Reservation) -> Result<(), ReservationError> {
        let mut store = self.store.lock().unwrap();
        if !store.reservations.contains_key(reservation.id()) {
            return Err(ReservationError::NotFound(*reservation.id()));
        }
        if !reservation.status().occupies_dates() {
            store.index.release(reservation.id());
        }
        store
            .reservations
            .insert(*reservation.id(), reservation.clone());
        debug!(reservation_id = %reservation.id(), status = ?reservation.status(), "reservation updated");
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &ReservationId,
    ) -> Result<Option<Reservation>, ReservationError> {
        Ok(self.store.lock().unwrap().reservations.get(id).cloned())
    }

    async fn is_caravan_available(
        &self,
        caravan_id: &CaravanId,
        period: &StayPeriod,
    ) -> Result<bool, ReservationError> {
        Ok(self.store.lock().unwrap().index.is_available(caravan_id, period))
    }
}
