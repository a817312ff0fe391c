//! Two-decimal rounding for money and time values.
//!
//! Rounding happens in decimal, not binary: `1.005` rounds to `1.01` even
//! though the nearest `f64` sits just below the half-cent.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts through the shortest round-trip representation, so `0.3`
/// becomes exactly `0.3` rather than its binary expansion.
pub(crate) fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

pub(crate) fn to_f64(value: Decimal) -> Option<f64> {
    value.to_string().parse().ok()
}

/// Rounds a decimal to cents, halves away from zero.
pub(crate) fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to 2 decimal places, halves away from zero.
///
/// For the non-negative values this crate produces that is half-up.
/// Non-finite input is returned unchanged.
///
/// # Examples
///
/// ```
/// use u_courier::pricing::round2;
///
/// assert_eq!(round2(98.7), 98.7);
/// assert_eq!(round2(1.428_571), 1.43);
/// assert_eq!(round2(1.005), 1.01);
/// assert_eq!(round2(128.015), 128.02);
/// ```
pub fn round2(value: f64) -> f64 {
    to_decimal(value)
        .map(round_cents)
        .and_then(to_f64)
        .unwrap_or(value)
}
