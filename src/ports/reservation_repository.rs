//! Reservation repository port.
//!
//! The reservation store owns the availability index: recording a
//! reservation and marking its days are one atomic step from the
//! caller's point of view, which is what preserves the no-double-booking
//! invariant under the single-writer model.

use async_trait::async_trait;

use crate::domain::foundation::{CaravanId, ReservationId, StayPeriod};
use crate::domain::reservation::{Reservation, ReservationError};

/// Persistence contract for reservations and their availability index.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Saves a new reservation and marks its days as occupied.
    ///
    /// Implementations must re-check availability under the same
    /// exclusion scope as the insert.
    ///
    /// # Errors
    ///
    /// - `DuplicateReservation` when the id already exists
    /// - `DateRangeTaken` when any day in the period is occupied
    async fn add(&self, reservation: &Reservation) -> Result<(), ReservationError>;

    /// Updates an existing reservation.
    ///
    /// When the stored reservation stops occupying its dates (cancelled
    /// or rejected), implementations release those days in the index.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the reservation does not exist
    async fn update(&self, reservation: &Reservation) -> Result<(), ReservationError>;

    /// Finds a reservation by id. Returns `None` when absent.
    async fn find_by_id(&self, id: &ReservationId)
        -> Result<Option<Reservation>, ReservationError>;

    /// Returns true when every day in the period is free for the caravan.
    async fn is_caravan_available(
        &self,
        caravan_id: &CaravanId,
        period: &StayPeriod,
    ) -> Result<bool, ReservationError>;
}
