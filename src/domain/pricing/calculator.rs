//! Total price computation.

use tracing::debug;

use crate::domain::foundation::StayPeriod;

use super::DiscountPolicy;

/// Computes the integral total price of a stay.
///
/// The calculator is policy-agnostic: the caller chooses the
/// [`DiscountPolicy`] per call, so new policies never require changes
/// here.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCalculator;

impl PriceCalculator {
    pub fn new() -> Self {
        Self
    }

    /// `daily_rate * inclusive days`, minus the policy's discount.
    ///
    /// The discount is clamped so the total never goes below zero: a
    /// policy returning more than the original price is a contract
    /// violation we refuse to amplify.
    pub fn total_price(&self, daily_rate: i64, period: &StayPeriod, policy: DiscountPolicy) -> i64 {
        let rental_days = period.days();
        let original_price = daily_rate.saturating_mul(rental_days);
        let discount = policy.discount(original_price, rental_days).clamp(0, original_price);
        let total = original_price - discount;
        debug!(
            original_price,
            discount, total, rental_days, "price computed"
        );
        total
    }
}
