//! Pricing engine: discount policies and total price computation.

mod calculator;
mod discount;

pub use calculator::PriceCalculator;
pub use discount::{DiscountPolicy, LONG_STAY_MIN_DAYS};
