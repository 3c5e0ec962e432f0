//! Reservation status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle state of a reservation.
///
/// ```text
/// Pending ──► Confirmed ──► Completed
///    │            │
///    └──────┬─────┘
///           ▼
///       Cancelled
/// ```
///
/// Completed and Cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Awaiting host approval. Initial state.
    Pending,
    /// Approved by the host; the stay will happen.
    Confirmed,
    /// Rejected by the host or cancelled by the guest.
    Cancelled,
    /// Stay finished; unlocks review eligibility.
    Completed,
}

impl ReservationStatus {
    /// Returns true while the reservation still occupies its dates.
    ///
    /// Pending reservations hold their dates too: overlap conflicts are
    /// checked against both Pending and Confirmed bookings.
    pub fn occupies_dates(&self) -> bool {
        matches!(self, ReservationStatus::Pending | ReservationStatus::Confirmed)
    }
}

impl StateMachine for ReservationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, target),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ReservationStatus::*;
        match self {
            Pending => vec![Confirmed, Cancelled],
            Confirmed => vec![Completed, Cancelled],
            Cancelled => vec![],
            Completed => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_confirmed_or_cancelled() {
        assert!(ReservationStatus::Pending.can_transition_to(&ReservationStatus::Confirmed));
        assert!(ReservationStatus::Pending.can_transition_to(&ReservationStatus::Cancelled));
        assert!(!ReservationStatus::Pending.can_transition_to(&ReservationStatus::Completed));
    }

    #[test]
    fn confirmed_can_complete_or_cancel() {
        assert!(ReservationStatus::Confirmed.can_transition_to(&ReservationStatus::Completed));
        assert!(ReservationStatus::Confirmed.can_transition_to(&ReservationStatus::Cancelled));
        assert!(!ReservationStatus::Confirmed.can_transition_to(&ReservationStatus::Pending));
    }

    #[test]
    fn completed_and_cancelled_are_terminal() {
        assert!(ReservationStatus::Completed.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
    }

    #[test]
    fn only_live_states_occupy_dates() {
        assert!(ReservationStatus::Pending.occupies_dates());
        assert!(ReservationStatus::Confirmed.occupies_dates());
        assert!(!ReservationStatus::Cancelled.occupies_dates());
        assert!(!ReservationStatus::Completed.occupies_dates());
    }
}
