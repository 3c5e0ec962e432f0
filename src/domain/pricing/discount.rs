//! Discount policies.
//!
//! A closed set of tagged variants rather than trait objects: the set of
//! policies is a domain decision, and new ones (seasonal, loyalty) are
//! added here without touching the calculator.

use serde::{Deserialize, Serialize};

/// Inclusive stay length, in days, at which the long-stay discount kicks in.
pub const LONG_STAY_MIN_DAYS: i64 = 7;

/// Discount applied to the original price of a stay.
///
/// Selection is the caller's job (the reservation creation handler picks
/// by duration); the calculator stays policy-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// Full price.
    NoDiscount,
    /// 10% off when the stay is at least [`LONG_STAY_MIN_DAYS`] days,
    /// floored to an integer amount.
    LongStay,
}

impl DiscountPolicy {
    /// Standard selection rule: long stays get the long-stay discount.
    pub fn for_duration(rental_days: i64) -> Self {
        if rental_days >= LONG_STAY_MIN_DAYS {
            DiscountPolicy::LongStay
        } else {
            DiscountPolicy::NoDiscount
        }
    }

    /// Discount amount for a stay, in minor currency units.
    pub fn discount(&self, original_price: i64, rental_days: i64) -> i64 {
        match self {
            DiscountPolicy::NoDiscount => 0,
            DiscountPolicy::LongStay => {
                if rental_days >= LONG_STAY_MIN_DAYS {
                    original_price / 10
                } else {
                    0
                }
            }
        }
    }
}
