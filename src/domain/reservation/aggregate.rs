//! Reservation aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CaravanId, ReservationId, StateMachine, StayPeriod, Timestamp, UserId};

use super::{ReservationError, ReservationStatus};

/// A guest's booking of a caravan for an inclusive date range.
///
/// # Invariants
///
/// - references guest and caravan by id only (no shared object graph)
/// - `total_price` is fixed at creation by the pricing engine
/// - status changes only through the transition methods below
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    guest_id: UserId,
    caravan_id: CaravanId,
    period: StayPeriod,
    /// Total price in minor currency units, discount already applied.
    total_price: i64,
    status: ReservationStatus,
    created_at: Timestamp,
}

impl Reservation {
    /// Creates a new reservation in Pending state.
    ///
    /// Validation of role, dates, and availability happens in the
    /// [`super::ReservationValidator`] before this constructor runs.
    pub fn new(
        id: ReservationId,
        guest_id: UserId,
        caravan_id: CaravanId,
        period: StayPeriod,
        total_price: i64,
    ) -> Self {
        Self {
            id,
            guest_id,
            caravan_id,
            period,
            total_price,
            status: ReservationStatus::Pending,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &ReservationId {
        &self.id
    }

    pub fn guest_id(&self) -> &UserId {
        &self.guest_id
    }

    pub fn caravan_id(&self) -> &CaravanId {
        &self.caravan_id
    }

    pub fn period(&self) -> &StayPeriod {
        &self.period
    }

    pub fn total_price(&self) -> i64 {
        self.total_price
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true when the given user made this booking.
    pub fn is_booked_by(&self, user_id: &UserId) -> bool {
        self.guest_id == *user_id
    }

    /// Host approval: Pending -> Confirmed.
    pub fn approve(&mut self) -> Result<(), ReservationError> {
        self.transition(ReservationStatus::Confirmed, "approve")
    }

    /// Host rejection: Pending -> Cancelled.
    pub fn reject(&mut self) -> Result<(), ReservationError> {
        if self.status != ReservationStatus::Pending {
            return Err(ReservationError::InvalidState {
                from: self.status,
                action: "reject",
            });
        }
        self.transition(ReservationStatus::Cancelled, "reject")
    }

    /// Host completion: Confirmed -> Completed. Unlocks review eligibility.
    pub fn complete(&mut self) -> Result<(), ReservationError> {
        self.transition(ReservationStatus::Completed, "complete")
    }

    /// Guest cancellation: Pending or Confirmed -> Cancelled.
    pub fn cancel(&mut self) -> Result<(), ReservationError> {
        self.transition(ReservationStatus::Cancelled, "cancel")
    }

    fn transition(&mut self, target: ReservationStatus, action: &'static str) -> Result<(), ReservationError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|_| ReservationError::InvalidState {
                from: self.status,
                action,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::BookingDate;

    fn reservation() -> Reservation {
        let start = BookingDate::today().plus_days(10);
        let period = StayPeriod::new(start, start.plus_days(6)).unwrap();
        Reservation::new(ReservationId::new(), UserId::new(), CaravanId::new(), period, 504_000)
    }

    #[test]
    fn starts_pending() {
        assert_eq!(reservation().status(), ReservationStatus::Pending);
    }

    #[test]
    fn approve_then_complete() {
        let mut r = reservation();
        r.approve().unwrap();
        assert_eq!(r.status(), ReservationStatus::Confirmed);
        r.complete().unwrap();
        assert_eq!(r.status(), ReservationStatus::Completed);
    }

    #[test]
    fn cannot_complete_from_pending() {
        let mut r = reservation();
        let err = r.complete().unwrap_err();
        assert!(matches!(
            err,
            ReservationError::InvalidState {
                from: ReservationStatus::Pending,
                action: "complete",
            }
        ));
        assert_eq!(r.status(), ReservationStatus::Pending);
    }

    #[test]
    fn cannot_reject_after_confirmation() {
        let mut r = reservation();
        r.approve().unwrap();
        assert!(r.reject().is_err());
        assert_eq!(r.status(), ReservationStatus::Confirmed);
    }

    #[test]
    fn guest_can_cancel_pending_or_confirmed() {
        let mut pending = reservation();
        pending.cancel().unwrap();
        assert_eq!(pending.status(), ReservationStatus::Cancelled);

        let mut confirmed = reservation();
        confirmed.approve().unwrap();
        confirmed.cancel().unwrap();
        assert_eq!(confirmed.status(), ReservationStatus::Cancelled);
    }

    #[test]
    fn terminal_states_reject_all_transitions() {
        let mut r = reservation();
        r.cancel().unwrap();
        assert!(r.approve().is_err());
        assert!(r.complete().is_err());
        assert!(r.cancel().is_err());
    }
}
