//! Offer table lookup.

use super::{Interval, OfferRule};

/// The standard offer table.
///
/// | code   | weight (kg) | distance (km) | discount |
/// |--------|-------------|---------------|----------|
/// | OFR001 | [70, 200]   | [0, 200)      | 10%      |
/// | OFR002 | [100, 250]  | [50, 150]     | 7%       |
/// | OFR003 | [10, 150]   | [50, 250]     | 5%       |
pub const STANDARD_OFFERS: [OfferRule; 3] = [
    OfferRule::new(
        "OFR001",
        Interval::closed(70.0, 200.0),
        Interval::half_open(0.0, 200.0),
        10.0,
    ),
    OfferRule::new(
        "OFR002",
        Interval::closed(100.0, 250.0),
        Interval::closed(50.0, 150.0),
        7.0,
    ),
    OfferRule::new(
        "OFR003",
        Interval::closed(10.0, 150.0),
        Interval::closed(50.0, 250.0),
        5.0,
    ),
];

/// Resolves offer codes against a rule table.
///
/// A code that is unknown, or whose ranges do not cover the package, yields
/// a 0% discount rather than an error. Overlapping rules are allowed; the
/// engine never picks a code on the caller's behalf.
///
/// # Examples
///
/// ```
/// use u_courier::offers::OfferEngine;
///
/// let engine = OfferEngine::standard();
/// assert_eq!(engine.eligible_offers(110.0, 60.0), vec!["OFR001", "OFR002", "OFR003"]);
/// assert_eq!(engine.discount_percent("OFR002", 110.0, 60.0), 7.0);
/// assert_eq!(engine.discount_percent("OFR002", 75.0, 125.0), 0.0);
/// assert_eq!(engine.discount_percent("OFFR002", 110.0, 60.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct OfferEngine {
    rules: Vec<OfferRule>,
}

impl OfferEngine {
    /// Creates an engine over an explicit rule table.
    pub fn new(rules: Vec<OfferRule>) -> Self {
        Self { rules }
    }

    /// Creates an engine over [`STANDARD_OFFERS`].
    pub fn standard() -> Self {
        Self::new(STANDARD_OFFERS.to_vec())
    }

    /// Appends a rule to the table.
    ///
    /// If the code already exists, the earlier row wins on lookup.
    pub fn with_rule(mut self, rule: OfferRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rule table in lookup order.
    pub fn rules(&self) -> &[OfferRule] {
        &self.rules
    }

    /// Looks up a rule by code.
    pub fn rule(&self, code: &str) -> Option<&OfferRule> {
        self.rules.iter().find(|r| r.code() == code)
    }

    /// Codes whose ranges cover the given weight and distance, in table order.
    pub fn eligible_offers(&self, weight: f64, distance: f64) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|r| r.applies_to(weight, distance))
            .map(|r| r.code())
            .collect()
    }

    /// Discount percent for `code` applied to a package, in `[0, 100]`.
    pub fn discount_percent(&self, code: &str, weight: f64, distance: f64) -> f64 {
        match self.rule(code) {
            Some(rule) if rule.applies_to(weight, distance) => rule.discount_percent(),
            _ => 0.0,
        }
    }
}

impl Default for OfferEngine {
    fn default() -> Self {
        Self::standard()
    }
}
