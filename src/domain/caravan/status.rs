//! Caravan listing status.

use serde::{Deserialize, Serialize};

/// Whether a caravan can currently accept new booking requests.
///
/// Unlike reservation status this is not a strict state machine: a host
/// may take a caravan in and out of maintenance at any time, and the
/// lifecycle handlers flip Available/Reserved around confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaravanStatus {
    /// Open for new booking requests.
    Available,
    /// Held by a confirmed reservation.
    Reserved,
    /// Taken off the market by the host.
    Maintenance,
}

impl CaravanStatus {
    /// Only Available caravans pass the booking validator.
    pub fn is_bookable(&self) -> bool {
        matches!(self, CaravanStatus::Available)
    }
}
