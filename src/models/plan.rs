//! Delivery plan: the combined output of pricing and scheduling.

use serde::Serialize;

use super::{PricedPackage, ScheduledPackage, Vehicle};
use crate::pricing::round2;

/// Priced packages (in submission order) and the vehicle schedule for one
/// batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPlan {
    priced_packages: Vec<PricedPackage>,
    vehicles: Vec<Vehicle>,
}

impl DeliveryPlan {
    /// Creates a plan from pricing and scheduling results.
    pub fn new(priced_packages: Vec<PricedPackage>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            priced_packages,
            vehicles,
        }
    }

    /// Priced packages in submission order.
    pub fn priced_packages(&self) -> &[PricedPackage] {
        &self.priced_packages
    }

    /// Vehicles that received packages, by ascending ID.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Looks up a vehicle by ID.
    pub fn vehicle(&self, id: usize) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    /// Finds where a package was scheduled.
    pub fn find(&self, package_id: &str) -> Option<(&Vehicle, &ScheduledPackage)> {
        self.vehicles.iter().find_map(|v| {
            v.packages()
                .find(|p| p.id() == package_id)
                .map(|p| (v, p))
        })
    }

    /// Number of packages placed on vehicles.
    pub fn num_scheduled(&self) -> usize {
        self.vehicles.iter().map(|v| v.num_packages()).sum()
    }

    /// Sum of discounted costs.
    pub fn total_cost(&self) -> f64 {
        round2(self.priced_packages.iter().map(|p| p.total_cost()).sum())
    }

    /// Sum of discounts granted.
    pub fn total_discount(&self) -> f64 {
        round2(self.priced_packages.iter().map(|p| p.discount()).sum())
    }

    /// Longest vehicle total duration, or 0 for an empty plan.
    pub fn completion_time(&self) -> f64 {
        self.vehicles
            .iter()
            .map(|v| v.total_duration())
            .fold(0.0, f64::max)
    }
}
