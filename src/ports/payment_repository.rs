//! Payment repository port.

use async_trait::async_trait;

use crate::domain::foundation::{PaymentId, ReservationId};
use crate::domain::payment::{Payment, PaymentError};

/// Persistence contract for payment records.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Saves a new payment record.
    async fn add(&self, payment: &Payment) -> Result<(), PaymentError>;

    /// Finds a payment by id. Returns `None` when absent.
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, PaymentError>;

    /// Lists all checkout attempts for a reservation.
    async fn find_by_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Vec<Payment>, PaymentError>;
}
