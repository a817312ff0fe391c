//! Offer rule and interval types.

use serde::Serialize;

/// A numeric range with an inclusive lower bound and an inclusive or
/// exclusive upper bound.
///
/// # Examples
///
/// ```
/// use u_courier::offers::Interval;
///
/// let closed = Interval::closed(50.0, 150.0);
/// assert!(closed.contains(50.0));
/// assert!(closed.contains(150.0));
///
/// let half_open = Interval::half_open(0.0, 200.0);
/// assert!(half_open.contains(199.99));
/// assert!(!half_open.contains(200.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    min: f64,
    max: f64,
    max_inclusive: bool,
}

impl Interval {
    /// Creates `[min, max]`.
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            max_inclusive: true,
        }
    }

    /// Creates `[min, max)`.
    pub const fn half_open(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            max_inclusive: false,
        }
    }

    /// Lower bound (always inclusive).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if the upper bound is part of the range.
    pub fn is_max_inclusive(&self) -> bool {
        self.max_inclusive
    }

    /// Returns `true` if `value` lies within this range.
    ///
    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min {
            return false;
        }
        if self.max_inclusive {
            value <= self.max
        } else {
            value < self.max
        }
    }
}

/// One row of the offer table: a code, the weight and distance ranges a
/// package must fall in, and the discount it grants.
///
/// # Examples
///
/// ```
/// use u_courier::offers::{Interval, OfferRule};
///
/// let rule = OfferRule::new(
///     "OFR004",
///     Interval::closed(1.0, 5.0),
///     Interval::closed(0.0, 10.0),
///     15.0,
/// );
/// assert!(rule.applies_to(3.0, 10.0));
/// assert!(!rule.applies_to(6.0, 10.0));
/// assert_eq!(rule.discount_percent(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRule {
    code: &'static str,
    weight: Interval,
    distance: Interval,
    discount_percent: f64,
}

impl OfferRule {
    /// Creates a rule.
    pub const fn new(
        code: &'static str,
        weight: Interval,
        distance: Interval,
        discount_percent: f64,
    ) -> Self {
        Self {
            code,
            weight,
            distance,
            discount_percent,
        }
    }

    /// Offer code selecting this rule.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Eligible package weight range (kg).
    pub fn weight(&self) -> &Interval {
        &self.weight
    }

    /// Eligible delivery distance range (km).
    pub fn distance(&self) -> &Interval {
        &self.distance
    }

    /// Discount granted when the rule applies, clamped to `[0, 100]` percent.
    pub fn discount_percent(&self) -> f64 {
        self.discount_percent.clamp(0.0, 100.0)
    }

    /// Returns `true` if a package with this weight and distance qualifies.
    pub fn applies_to(&self, weight: f64, distance: f64) -> bool {
        self.weight.contains(weight) && self.distance.contains(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_closed_bounds() {
        let i = Interval::closed(10.0, 20.0);
        assert!(i.contains(10.0));
        assert!(i.contains(20.0));
        assert!(!i.contains(9.99));
        assert!(!i.contains(20.01));
        assert!(i.is_max_inclusive());
    }

    #[test]
    fn test_interval_half_open_bounds() {
        let i = Interval::half_open(0.0, 200.0);
        assert!(i.contains(0.0));
        assert!(!i.contains(200.0));
        assert!(!i.is_max_inclusive());
    }

    #[test]
    fn test_interval_rejects_nan() {
        let i = Interval::closed(0.0, 100.0);
        assert!(!i.contains(f64::NAN));
    }

    #[test]
    fn test_rule_clamps_discount() {
        let any = Interval::closed(0.0, 1.0);
        assert_eq!(OfferRule::new("A", any, any, 150.0).discount_percent(), 100.0);
        assert_eq!(OfferRule::new("B", any, any, -5.0).discount_percent(), 0.0);
    }

    #[test]
    fn test_rule_requires_both_ranges() {
        let rule = OfferRule::new(
            "X",
            Interval::closed(100.0, 250.0),
            Interval::closed(50.0, 150.0),
            7.0,
        );
        assert!(rule.applies_to(100.0, 50.0));
        assert!(!rule.applies_to(99.0, 100.0));
        assert!(!rule.applies_to(150.0, 151.0));
    }
}
