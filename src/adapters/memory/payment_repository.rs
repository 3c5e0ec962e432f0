//! In-memory payment repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{PaymentId, ReservationId};
use crate::domain::payment::{Payment, PaymentError};
use crate::ports::PaymentRepository;

/// In-memory implementation of the payment repository.
#[derive(Debug, Default)]
pub struct InMemoryPaymentRepository {
    payments: Mutex<HashMap<PaymentId, Payment>>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.payments.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn add(&self, payment: &Payment) -> Result<(), PaymentError> {
        self.payments
            .lock()
            .unwrap()
            .insert(*payment.id(), payment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, PaymentError> {
        Ok(self.payments.lock().unwrap().get(id).cloned())
    }

    async fn find_by_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Vec<Payment>, PaymentError> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.reservation_id() == reservation_id)
            .cloned()
            .collect())
    }
}
