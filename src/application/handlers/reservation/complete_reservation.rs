//! CompleteReservationHandler - host closing out a finished stay.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::caravan::CaravanStatus;
use crate::domain::foundation::{ReservationId, UserId};
use crate::domain::reservation::{Reservation, ReservationError};
use crate::ports::{CaravanRepository, Notifier, ReservationRepository};

/// Command for a host to mark a confirmed stay as completed.
#[derive(Debug, Clone)]
pub struct CompleteReservationCommand {
    pub host_id: UserId,
    pub reservation_id: ReservationId,
}

/// Handler for completion. Completion unlocks review eligibility.
pub struct CompleteReservationHandler {
    caravans: Arc<dyn CaravanRepository>,
    reservations: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn Notifier>,
}

impl CompleteReservationHandler {
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

    /// Moves a Confirmed reservation to Completed and returns the caravan
    /// to the open market.
    ///
    /// # Errors
    ///
    /// - `Forbidden` when the actor does not own the caravan
    /// - `InvalidState` when the reservation is not Confirmed
    pub async fn handle(
        &self,
        cmd: CompleteReservationCommand,
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

        reservation.complete()?;
        // A caravan in Maintenance stays off the market.
        if caravan.status() == CaravanStatus::Reserved {
            caravan.mark_available();
        }

        self.reservations.update(&reservation).await?;
        self.caravans
            .update(&caravan)
            .await
            .map_err(|e| ReservationError::Infrastructure(e.to_string()))?;

        info!(reservation_id = %reservation.id(), caravan_id = %caravan.id(), "reservation completed");

        let message = format!(
            "Your stay in {} is complete. You can now leave a review.",
            caravan.name()
        );
        if let Err(err) = self.notifier.notify(reservation.guest_id(), &message).await {
            warn!(guest_id = %reservation.guest_id(), %err, "notification delivery failed");
        }

        Ok(reservation)
    }
}
