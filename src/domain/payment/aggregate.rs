//! Payment aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PaymentId, ReservationId, StateMachine, Timestamp};

/// Lifecycle state of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Created, gateway not yet answered.
    Pending,
    /// Gateway accepted the charge.
    Completed,
    /// Gateway declined the charge.
    Failed,
}

impl StateMachine for PaymentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (PaymentStatus::Pending, PaymentStatus::Completed)
                | (PaymentStatus::Pending, PaymentStatus::Failed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            PaymentStatus::Pending => vec![PaymentStatus::Completed, PaymentStatus::Failed],
            PaymentStatus::Completed | PaymentStatus::Failed => vec![],
        }
    }
}

/// One checkout attempt for a reservation.
///
/// # Invariants
///
/// - `amount` equals the reservation's total price at creation time
///   (enforced by the payment handler)
/// - one record per checkout attempt; retries create new records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    id: PaymentId,
    reservation_id: ReservationId,
    /// Charged amount in minor currency units.
    amount: i64,
    status: PaymentStatus,
    created_at: Timestamp,
}

impl Payment {
    /// Creates a pending payment record.
    pub fn new(id: PaymentId, reservation_id: ReservationId, amount: i64) -> Self {
        Self {
            id,
            reservation_id,
            amount,
            status: PaymentStatus::Pending,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &PaymentId {
        &self.id
    }

    pub fn reservation_id(&self) -> &ReservationId {
        &self.reservation_id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Marks the charge as accepted by the gateway.
    pub fn mark_completed(&mut self) {
        if let Ok(next) = self.status.transition_to(PaymentStatus::Completed) {
            self.status = next;
        }
    }

    /// Marks the charge as declined by the gateway.
    pub fn mark_failed(&mut self) {
        if let Ok(next) = self.status.transition_to(PaymentStatus::Failed) {
            self.status = next;
        }
    }
}
