//! CancelReservationHandler - guest withdrawing a booking.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::caravan::CaravanStatus;
use crate::domain::foundation::{ReservationId, UserId};
use crate::domain::reservation::{Reservation, ReservationError};
use crate::ports::{CaravanRepository, Notifier, ReservationRepository};

/// Command for a guest to cancel their own booking.
#[derive(Debug, Clone)]
pub struct CancelReservationCommand {
    pub guest_id: UserId,
    pub reservation_id: ReservationId,
}

/// Handler for guest cancellation.
pub struct CancelReservationHandler {
    caravans: Arc<dyn CaravanRepository>,
    reservations: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn Notifier>,
}

impl CancelReservationHandler {
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

    /// Cancels a Pending or Confirmed reservation, freeing its dates and
    /// returning a reserved caravan to the open market.
    ///
    /// # Errors
    ///
    /// - `Forbidden` when the actor is not the booking guest
    /// - `InvalidState` when the reservation is already terminal
    pub async fn handle(
        &self,
        cmd: CancelReservationCommand,
    ) -> Result<Reservation, ReservationError> {
        let mut reservation = self
            .reservations
            .find_by_id(&cmd.reservation_id)
            .await?
            .ok_or(ReservationError::NotFound(cmd.reservation_id))?;

        if !reservation.is_booked_by(&cmd.guest_id) {
            return Err(ReservationError::Forbidden);
        }

        let mut caravan = self
            .caravans
            .find_by_id(reservation.caravan_id())
            .await
            .map_err(|e| ReservationError::Infrastructure(e.to_string()))?
            .ok_or(ReservationError::CaravanNotFound(*reservation.caravan_id()))?;

        reservation.cancel()?;
        // Only a Reserved caravan goes back on the market; a host who put
        // it into Maintenance keeps it there.
        if caravan.status() == CaravanStatus::Reserved {
            caravan.mark_available();
        }

        self.reservations.update(&reservation).await?;
        self.caravans
            .update(&caravan)
            .await
            .map_err(|e| ReservationError::Infrastructure(e.to_string()))?;

        info!(reservation_id = %reservation.id(), caravan_id = %caravan.id(), "reservation cancelled");

        let message = format!(
            "Booking {} for {} was cancelled by the guest.",
            reservation.id(),
            caravan.name()
        );
        if let Err(err) = self.notifier.notify(caravan.host_id(), &message).await {
            warn!(host_id = %caravan.host_id(), %err, "notification delivery failed");
        }

        Ok(reservation)
    }
}
