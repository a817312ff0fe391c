//! Delivery cost calculation.

use rust_decimal::Decimal;

use crate::models::{Package, PricedPackage};
use crate::offers::OfferEngine;

use super::round2;
use super::rounding::{round_cents, to_decimal, to_f64};

/// Currency units charged per kg of package weight.
pub const COST_PER_KG: f64 = 10.0;

/// Currency units charged per km of delivery distance.
pub const COST_PER_KM: f64 = 5.0;

/// Prices packages against an offer table.
///
/// `raw = base + weight * 10 + distance * 5`, the discount is the offer's
/// percentage of `raw`, and `total = raw - discount`. Each value is rounded
/// to 2 decimals, with `total` derived from the rounded discount so the
/// three numbers always reconcile. The arithmetic runs in `rust_decimal`,
/// so half-cent discounts round up as written, not as stored in binary.
///
/// Pricing never fails: out-of-range inputs still produce numbers.
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
/// use u_courier::offers::OfferEngine;
/// use u_courier::pricing::CostCalculator;
///
/// let offers = OfferEngine::standard();
/// let calc = CostCalculator::new(&offers);
///
/// let pkg = Package::new("PKG4", 110.0, 60.0).with_offer_code("OFR002");
/// let priced = calc.price(&pkg, 10.0);
/// assert_eq!(priced.raw_cost(), 1410.0);
/// assert_eq!(priced.discount(), 98.7);
/// assert_eq!(priced.total_cost(), 1311.3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostCalculator<'a> {
    offers: &'a OfferEngine,
}

impl<'a> CostCalculator<'a> {
    /// Creates a calculator backed by the given offer table.
    pub fn new(offers: &'a OfferEngine) -> Self {
        Self { offers }
    }

    /// Undiscounted cost, unrounded.
    pub fn raw_cost(weight: f64, distance: f64, base_cost: f64) -> f64 {
        base_cost + weight * COST_PER_KG + distance * COST_PER_KM
    }

    /// Prices a package using its own offer code.
    pub fn price(&self, package: &Package, base_cost: f64) -> PricedPackage {
        self.price_with_offer(package, package.offer_code(), base_cost)
    }

    /// Prices a package with an explicitly chosen offer code.
    ///
    /// The returned package carries the offer code actually evaluated.
    pub fn price_with_offer(
        &self,
        package: &Package,
        offer_code: Option<&str>,
        base_cost: f64,
    ) -> PricedPackage {
        let weight = package.weight();
        let distance = package.distance();
        let raw = Self::raw_cost(weight, distance, base_cost);

        let percent = offer_code
            .map(|code| self.offers.discount_percent(code, weight, distance))
            .unwrap_or(0.0);

        let (raw, discount, total) =
            decimal_costs(weight, distance, base_cost, percent).unwrap_or_else(|| {
                let discount = if percent == 0.0 {
                    0.0
                } else {
                    round2(raw * percent / 100.0)
                };
                let raw = round2(raw);
                (raw, discount, round2(raw - discount))
            });

        let package = match offer_code {
            Some(code) => package.clone().with_offer_code(code),
            None => Package::new(package.id(), weight, distance),
        };
        PricedPackage::new(package, raw, discount, total)
    }

    /// Prices a batch, preserving input order.
    pub fn price_all(&self, packages: &[Package], base_cost: f64) -> Vec<PricedPackage> {
        packages.iter().map(|p| self.price(p, base_cost)).collect()
    }
}

/// Rounded `(raw, discount, total)` computed in decimal. `None` on
/// non-finite input or overflow; callers fall back to `f64`.
fn decimal_costs(
    weight: f64,
    distance: f64,
    base_cost: f64,
    percent: f64,
) -> Option<(f64, f64, f64)> {
    let by_weight = to_decimal(weight)?.checked_mul(to_decimal(COST_PER_KG)?)?;
    let by_distance = to_decimal(distance)?.checked_mul(to_decimal(COST_PER_KM)?)?;
    let raw = to_decimal(base_cost)?
        .checked_add(by_weight)?
        .checked_add(by_distance)?;

    let discount = raw
        .checked_mul(to_decimal(percent)?)?
        .checked_div(Decimal::ONE_HUNDRED)?;
    let discount = round_cents(discount);
    let raw = round_cents(raw);
    let total = raw.checked_sub(discount)?;

    Some((to_f64(raw)?, to_f64(discount)?, to_f64(total)?))
}
