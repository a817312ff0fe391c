//! Trip and scheduled package types.

use serde::Serialize;

use super::PricedPackage;

/// A priced package placed on a vehicle's trip.
///
/// Times are in hours, rounded to 2 decimals. `cumulative_delivery_time`
/// runs across the whole vehicle, not just the trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPackage {
    /// The priced package.
    #[serde(flatten)]
    pub package: PricedPackage,
    /// This package's own transit time (distance / speed).
    pub transit_time: f64,
    /// Elapsed time on the vehicle when this package is delivered.
    pub cumulative_delivery_time: f64,
    /// 1-based trip index within the vehicle.
    pub trip_index: usize,
}

impl ScheduledPackage {
    /// Package ID.
    pub fn id(&self) -> &str {
        self.package.id()
    }
}

/// One outing of a vehicle carrying a capacity-bounded set of packages.
///
/// # Examples
///
/// ```
/// use u_courier::models::Trip;
///
/// let trip = Trip::new(1);
/// assert!(trip.is_empty());
/// assert_eq!(trip.index(), 1);
/// assert_eq!(trip.load(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    index: usize,
    packages: Vec<ScheduledPackage>,
    load: f64,
    duration: f64,
}

impl Trip {
    /// Creates an empty trip with the given 1-based index.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            packages: Vec::new(),
            load: 0.0,
            duration: 0.0,
        }
    }

    /// Appends a package, adding its weight to the trip load.
    pub fn push_package(&mut self, package: ScheduledPackage) {
        self.load += package.package.weight();
        self.packages.push(package);
    }

    /// 1-based trip index within the vehicle.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Packages in delivery order.
    pub fn packages(&self) -> &[ScheduledPackage] {
        &self.packages
    }

    /// Number of packages on this trip.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Total weight carried.
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Sum of the packages' transit times (set by scheduler).
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sets the trip duration (used by scheduler).
    pub fn set_duration(&mut self, d: f64) {
        self.duration = d;
    }

    /// Package IDs in delivery order.
    pub fn package_ids(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.id()).collect()
    }
}
