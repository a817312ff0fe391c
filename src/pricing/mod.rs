//! Package pricing.
//!
//! - [`CostCalculator`] — Weight/distance rate card with offer discounts
//! - [`round2`] — 2-decimal rounding shared by money and time values

mod calculator;
mod rounding;

pub use calculator::{CostCalculator, COST_PER_KG, COST_PER_KM};
pub use rounding::round2;
