//! ApproveReservationHandler - host confirming a pending booking.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{ReservationId, UserId};
use crate::domain::reservation::{Reservation, ReservationError, ReservationStatus};
use crate::ports::{CaravanRepository, Notifier, ReservationRepository};

/// Command for a host to approve a pending booking.
#[derive(Debug, Clone)]
pub struct ApproveReservationCommand {
    pub host_id: UserId,
    pub reservation_id: ReservationId,
}

/// Handler for host approval.
pub struct ApproveReservationHandler {
    caravans: Arc<dyn CaravanRepository>,
    reservations: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn Notifier>,
}

impl ApproveReservationHandler {
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

    /// Confirms the reservation and marks the caravan as reserved.
    ///
    /// Approving a reservation that is no longer Pending is a logged
    /// no-op: the stored reservation comes back unchanged, so a repeated
    /// approval (double click, retried message) cannot corrupt state.
    ///
    /// # Errors
    ///
    /// - `Forbidden` when the actor does not own the caravan
    /// - `NotFound` / `CaravanNotFound` for missing aggregates
    pub async fn handle(
        &self,
        cmd: ApproveReservationCommand,
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

        if reservation.status() != ReservationStatus::Pending {
            warn!(
                reservation_id = %reservation.id(),
                status = ?reservation.status(),
                "approval skipped: reservation is not pending"
            );
            return Ok(reservation);
        }

        reservation.approve()?;
        caravan.mark_reserved();

        self.reservations.update(&reservation).await?;
        self.caravans
            .update(&caravan)
            .await
            .map_err(|e| ReservationError::Infrastructure(e.to_string()))?;

        info!(reservation_id = %reservation.id(), caravan_id = %caravan.id(), "reservation approved");

        let message = format!(
            "Your booking of {} has been approved by the host.",
            caravan.name()
        );
        if let Err(err) = self.notifier.notify(reservation.guest_id(), &message).await {
            warn!(guest_id = %reservation.guest_id(), %err, "notification delivery failed");
        }

        Ok(reservation)
    }
}
