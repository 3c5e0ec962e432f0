//! RejectReservationHandler - host declining a pending booking.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::caravan::CaravanStatus;
use crate::domain::foundation::{ReservationId, UserId};
use crate::domain::reservation::{Reservation, ReservationError};
use crate::ports::{CaravanRepository, Notifier, ReservationRepository};

/// Command for a host to reject a pending booking.
#[derive(Debug, Clone)]
pub struct RejectReservationCommand {
    pub host_id: UserId,
    pub reservation_id: ReservationId,
}

/// Handler for host rejection.
pub struct RejectReservationHandler {
    caravans: Arc<dyn CaravanRepository>,
    reservations: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn Notifier>,
}

impl RejectReservationHandler {
    pub fn new(
        caravans: Arc<dyn CaravanRepository>,
        reservations: Arc<dyn ReservationRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            caravans,
            reservations,
            notifier,
        }
    }

    /// Cancels a pending reservation and frees its dates.
    ///
    /// Unlike approval, rejecting a reservation that is not Pending is an
    /// `InvalidState` error: a rejection arriving after confirmation must
    /// not silently unwind a paid-for booking.
    ///
    /// # Errors
    ///
    /// - `Forbidden` when the actor does not own the caravan
    /// - `InvalidState` when the reservation is not Pending
    pub async fn handle(
        &self,
        cmd: RejectReservationCommand,
    ) -> Result<Reservation, ReservationError> {
        let mut reservation = self
            .reservations
            .find_by_id(&cmd.reservation_id)
            .await?
            .ok_or(ReservationError::NotFound(cmd.reservation_id))?;
        let mut caravan = self
            .caravans
            .find_by_id(reservation.caravan_id())
            .await
            .map_err(|e| ReservationError::Infrastructure(e.to_string()))?
            .ok_or(ReservationError::CaravanNotFound(*reservation.caravan_id()))?;

        if !caravan.is_owned_by(&cmd.host_id) {
            return Err(ReservationError::Forbidden);
        }

        reservation.reject()?;
        // A caravan in Maintenance stays off the market.
        if caravan.status() == CaravanStatus::Reserved {
            caravan.mark_available();
        }

        // update() releases the booked days once the reservation stops
        // occupying them.
        self.reservations.update(&reservation).await?;
        self.caravans
            .update(&caravan)
            .await
            .map_err(|e| ReservationError::Infrastructure(e.to_string()))?;

        info!(reservation_id = %reservation.id(), caravan_id = %caravan.id(), "reservation rejected");

        let message = format!(
            "Your booking of {} was declined by the host.",
            caravan.name()
        );
        if let Err(err) = self.notifier.notify(reservation.guest_id(), &message).await {
            warn!(guest_id = %reservation.guest_id(), %err, "notification delivery failed");
        }

        Ok(reservation)
    }
}
