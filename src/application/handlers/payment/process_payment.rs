//! ProcessPaymentHandler - guest checkout for a booking.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{PaymentId, ReservationId, UserId};
use crate::domain::payment::{Payment, PaymentError};
use crate::ports::{Notifier, PaymentRepository, ReservationRepository};

/// Command to pay for a reservation.
#[derive(Debug, Clone)]
pub struct ProcessPaymentCommand {
    pub reservation_id: ReservationId,
    /// Amount offered, in minor currency units. Must equal the
    /// reservation's total price exactly.
    pub amount: i64,
}

/// Handler for checkout.
///
/// There is no external gateway integration: charges are accepted
/// unconditionally once the amount matches, mirroring a sandbox gateway.
/// A real adapter would sit behind the same repository-and-notify shape.
pub struct ProcessPaymentHandler {
    reservations: Arc<dyn ReservationRepository>,
    payments: Arc<dyn PaymentRepository>,
    notifier: Arc<dyn Notifier>,
}

impl ProcessPaymentHandler {
    pub fn new(
        reservations: Arc<dyn ReservationRepository>,
        payments: Arc<dyn PaymentRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            reservations,
            payments,
            notifier,
        }
    }

    /// Charges the exact reservation total and records the payment.
    ///
    /// # Errors
    ///
    /// - `ReservationNotFound` when the booking does not exist
    /// - `AmountMismatch` for over- and underpayment alike
    pub async fn handle(&self, cmd: ProcessPaymentCommand) -> Result<Payment, PaymentError> {
        let reservation = self
            .reservations
            .find_by_id(&cmd.reservation_id)
            .await
            .map_err(|e| PaymentError::Infrastructure(e.to_string()))?
            .ok_or(PaymentError::ReservationNotFound(cmd.reservation_id))?;

        if cmd.amount != reservation.total_price() {
            return Err(PaymentError::AmountMismatch {
                expected: reservation.total_price(),
                actual: cmd.amount,
            });
        }

        let mut payment = Payment::new(PaymentId::new(), cmd.reservation_id, cmd.amount);
        payment.mark_completed();
        self.payments.add(&payment).await?;

        info!(
            payment_id = %payment.id(),
            reservation_id = %cmd.reservation_id,
            amount = cmd.amount,
            "payment completed"
        );

        let message = format!(
            "Payment of {} for booking {} received.",
            cmd.amount, cmd.reservation_id
        );
        self.send(reservation.guest_id(), &message).await;

        Ok(payment)
    }

    async fn send(&self, user_id: &UserId, message: &str) {
        if let Err(err) = self.notifier.notify(user_id, message).await {
            warn!(%user_id, %err, "notification delivery failed");
        }
    }
}
