//! Greedy multi-trip fleet allocation.
//!
//! # Algorithm
//!
//! Packages are loaded heaviest first (ties: farthest first). Each package
//! goes to the earliest-available vehicle whose current trip still has room
//! for it. When no vehicle has room, the earliest-available vehicle starts a
//! new trip and takes the package there.
//!
//! A vehicle's availability ("cursor") is the running sum of one-way transit
//! times of everything it has carried. No return leg is added between
//! packages or between trips; only capacity overflow opens a new trip.
//!
//! Ties on cursor time go to the lowest vehicle ID, and the weight/distance
//! sort is stable, so the output is fully determined by the input.
//!
//! # Complexity
//!
//! O(n log n + n·v) where n = packages, v = vehicles.

use tracing::{debug, warn};

use crate::models::{FleetConfig, PricedPackage, ScheduledPackage, Trip, Vehicle};
use crate::pricing::round2;

/// Returns packages in loading order: weight descending, then distance
/// descending. Equal packages keep their input order.
pub fn loading_order(packages: &[PricedPackage]) -> Vec<&PricedPackage> {
    let mut order: Vec<&PricedPackage> = packages.iter().collect();
    order.sort_by(|a, b| {
        b.weight()
            .total_cmp(&a.weight())
            .then_with(|| b.distance().total_cmp(&a.distance()))
    });
    order
}

/// Assigns priced packages to vehicles and trips.
///
/// Returns only vehicles that received at least one package, by ascending
/// vehicle ID. Each package appears exactly once. Cumulative delivery
/// times, trip durations, and vehicle totals are rounded to 2 decimals.
///
/// The configuration is assumed valid (it can only be built through
/// [`FleetConfig::new`]). Packages are assumed to fit a single trip; one that
/// does not is still placed, alone on its trip, and logged as a warning.
///
/// # Examples
///
/// ```
/// use u_courier::models::{FleetConfig, Package};
/// use u_courier::offers::OfferEngine;
/// use u_courier::pricing::CostCalculator;
/// use u_courier::scheduling::allocate;
///
/// let config = FleetConfig::new(100.0, 2, 70.0, 200.0).unwrap();
/// let offers = OfferEngine::standard();
/// let priced = CostCalculator::new(&offers).price_all(
///     &[
///         Package::new("PKG1", 175.0, 100.0),
///         Package::new("PKG2", 155.0, 95.0),
///     ],
///     config.base_cost(),
/// );
///
/// let vehicles = allocate(&priced, &config);
/// assert_eq!(vehicles.len(), 2);
/// assert_eq!(vehicles[0].trips()[0].package_ids(), vec!["PKG1"]);
/// assert_eq!(vehicles[1].total_duration(), 1.36);
/// ```
pub fn allocate(packages: &[PricedPackage], config: &FleetConfig) -> Vec<Vehicle> {
    let capacity = config.max_carry_weight();
    let mut fleet: Vec<VehicleState<'_>> = (1..=config.vehicle_count())
        .map(VehicleState::new)
        .collect();

    for package in loading_order(packages) {
        let weight = package.weight();
        if weight > capacity {
            warn!(
                package = package.id(),
                weight,
                capacity,
                "package exceeds max carry weight; placing it on its own trip"
            );
        }

        let idx = match earliest(&fleet, |v| v.fits(weight, capacity)) {
            Some(idx) => idx,
            None => {
                // FleetConfig guarantees at least one vehicle.
                let idx = earliest(&fleet, |_| true).unwrap_or(0);
                fleet[idx].open_trip();
                idx
            }
        };

        let transit = config.transit_time(package.distance());
        let vehicle = &mut fleet[idx];
        vehicle.load(package, transit);
        debug!(
            package = package.id(),
            vehicle = vehicle.id,
            trip = vehicle.trip_index,
            cursor = vehicle.cursor,
            "package assigned"
        );
    }

    fleet
        .into_iter()
        .filter(|v| !v.placements.is_empty())
        .map(VehicleState::into_vehicle)
        .collect()
}

/// Index of the vehicle with the smallest cursor among those matching
/// `eligible`. The first (lowest ID) wins ties.
fn earliest<F>(fleet: &[VehicleState<'_>], eligible: F) -> Option<usize>
where
    F: Fn(&VehicleState<'_>) -> bool,
{
    fleet
        .iter()
        .enumerate()
        .filter(|&(_, v)| eligible(v))
        .min_by(|(_, a), (_, b)| a.cursor.total_cmp(&b.cursor))
        .map(|(idx, _)| idx)
}

struct Placement<'a> {
    package: &'a PricedPackage,
    transit: f64,
    trip_index: usize,
}

/// Per-call vehicle bookkeeping while loading.
struct VehicleState<'a> {
    id: usize,
    cursor: f64,
    trip_index: usize,
    trip_weight: f64,
    trip_len: usize,
    placements: Vec<Placement<'a>>,
}

impl<'a> VehicleState<'a> {
    fn new(id: usize) -> Self {
        Self {
            id,
            cursor: 0.0,
            trip_index: 1,
            trip_weight: 0.0,
            trip_len: 0,
            placements: Vec::new(),
        }
    }

    fn fits(&self, weight: f64, capacity: f64) -> bool {
        self.trip_weight + weight <= capacity
    }

    /// Starts a new trip. An empty current trip is reused instead.
    fn open_trip(&mut self) {
        if self.trip_len == 0 {
            return;
        }
        self.trip_index += 1;
        self.trip_weight = 0.0;
        self.trip_len = 0;
        debug!(vehicle = self.id, trip = self.trip_index, "new trip");
    }

    fn load(&mut self, package: &'a PricedPackage, transit: f64) {
        self.cursor += transit;
        self.trip_weight += package.weight();
        self.trip_len += 1;
        self.placements.push(Placement {
            package,
            transit,
            trip_index: self.trip_index,
        });
    }

    /// Builds the output schedule. Delivery times are recomputed from the
    /// transit times in assignment order rather than read from the cursor.
    fn into_vehicle(self) -> Vehicle {
        let mut vehicle = Vehicle::new(self.id);
        let mut elapsed = 0.0;
        let mut total = 0.0;
        let mut trip: Option<(Trip, f64)> = None;

        for p in self.placements {
            let (mut current, duration) = match trip.take() {
                Some((t, d)) if t.index() == p.trip_index => (t, d),
                Some((mut t, d)) => {
                    t.set_duration(round2(d));
                    total += d;
                    vehicle.push_trip(t);
                    (Trip::new(p.trip_index), 0.0)
                }
                None => (Trip::new(p.trip_index), 0.0),
            };
            elapsed += p.transit;
            current.push_package(ScheduledPackage {
                package: p.package.clone(),
                transit_time: round2(p.transit),
                cumulative_delivery_time: round2(elapsed),
                trip_index: p.trip_index,
            });
            trip = Some((current, duration + p.transit));
        }

        if let Some((mut t, d)) = trip {
            t.set_duration(round2(d));
            total += d;
            vehicle.push_trip(t);
        }
        vehicle.set_total_duration(round2(total));
        vehicle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Package;
    use crate::offers::OfferEngine;
    use crate::pricing::CostCalculator;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn priced(packages: &[Package], base_cost: f64) -> Vec<PricedPackage> {
        let offers = OfferEngine::standard();
        CostCalculator::new(&offers).price_all(packages, base_cost)
    }

    fn config(vehicles: usize, speed: f64, capacity: f64) -> FleetConfig {
        FleetConfig::new(10.0, vehicles, speed, capacity).expect("valid config")
    }

    fn trip_ids(vehicle: &Vehicle) -> Vec<Vec<&str>> {
        vehicle.trips().iter().map(|t| t.package_ids()).collect()
    }

    fn sample_batch() -> Vec<PricedPackage> {
        priced(
            &[
                Package::new("PKG1", 50.0, 30.0).with_offer_code("OFR001"),
                Package::new("PKG2", 75.0, 125.0).with_offer_code("OFFR002"),
                Package::new("PKG3", 175.0, 100.0).with_offer_code("OFR003"),
                Package::new("PKG4", 110.0, 60.0).with_offer_code("OFR002"),
                Package::new("PKG5", 155.0, 95.0).with_offer_code("NA"),
            ],
            10.0,
        )
    }

    #[test]
    fn test_loading_order() {
        let batch = priced(
            &[
                Package::new("A", 50.0, 10.0),
                Package::new("B", 80.0, 5.0),
                Package::new("C", 50.0, 40.0),
                Package::new("D", 50.0, 10.0),
            ],
            0.0,
        );
        let ids: Vec<_> = loading_order(&batch).into_iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_sample_batch_schedule() {
        let vehicles = allocate(&sample_batch(), &config(2, 70.0, 200.0));
        assert_eq!(vehicles.len(), 2);

        let v1 = &vehicles[0];
        assert_eq!(v1.id(), 1);
        assert_eq!(trip_ids(v1), vec![vec!["PKG3"], vec!["PKG1"]]);
        assert_eq!(v1.trips()[0].duration(), 1.43);
        assert_eq!(v1.trips()[1].duration(), 0.43);
        assert_eq!(v1.total_duration(), 1.86);
        let times: Vec<_> = v1.packages().map(|p| p.cumulative_delivery_time).collect();
        assert_eq!(times, vec![1.43, 1.86]);

        let v2 = &vehicles[1];
        assert_eq!(v2.id(), 2);
        assert_eq!(trip_ids(v2), vec![vec!["PKG5"], vec!["PKG4", "PKG2"]]);
        assert_eq!(v2.trips()[0].duration(), 1.36);
        assert_eq!(v2.trips()[1].duration(), 2.64);
        assert_eq!(v2.total_duration(), 4.0);
        let times: Vec<_> = v2.packages().map(|p| p.cumulative_delivery_time).collect();
        assert_eq!(times, vec![1.36, 2.21, 4.0]);
        let transits: Vec<_> = v2.packages().map(|p| p.transit_time).collect();
        assert_eq!(transits, vec![1.36, 0.86, 1.79]);
    }

    #[test]
    fn test_trip_index_matches_trip() {
        let vehicles = allocate(&sample_batch(), &config(2, 70.0, 200.0));
        for v in &vehicles {
            for (i, trip) in v.trips().iter().enumerate() {
                assert_eq!(trip.index(), i + 1);
                assert!(trip.packages().iter().all(|p| p.trip_index == i + 1));
            }
        }
    }

    #[test]
    fn test_full_capacity_package_travels_alone() {
        let batch = priced(
            &[Package::new("LIGHT", 10.0, 20.0), Package::new("FULL", 200.0, 10.0)],
            0.0,
        );
        let vehicles = allocate(&batch, &config(1, 10.0, 200.0));
        assert_eq!(vehicles.len(), 1);
        assert_eq!(trip_ids(&vehicles[0]), vec![vec!["FULL"], vec!["LIGHT"]]);
        assert_eq!(vehicles[0].trips()[0].load(), 200.0);
        // 1h + 2h, no return leg.
        assert_eq!(vehicles[0].total_duration(), 3.0);
    }

    #[test]
    fn test_zero_distance_does_not_advance_cursor() {
        let batch = priced(
            &[Package::new("NEAR", 20.0, 0.0), Package::new("FAR", 10.0, 70.0)],
            0.0,
        );
        let vehicles = allocate(&batch, &config(2, 70.0, 200.0));
        // NEAR leaves vehicle 1 at cursor 0, so it also wins FAR on the tie.
        assert_eq!(vehicles.len(), 1);
        assert_eq!(trip_ids(&vehicles[0]), vec![vec!["NEAR", "FAR"]]);
        let times: Vec<_> = vehicles[0]
            .packages()
            .map(|p| p.cumulative_delivery_time)
            .collect();
        assert_eq!(times, vec![0.0, 1.0]);
    }

    #[test]
    fn test_ties_go_to_lowest_vehicle_id() {
        let batch = priced(
            &[
                Package::new("A", 50.0, 70.0),
                Package::new("B", 40.0, 70.0),
                Package::new("C", 30.0, 70.0),
                Package::new("D", 20.0, 70.0),
            ],
            0.0,
        );
        let vehicles = allocate(&batch, &config(3, 70.0, 200.0));
        assert_eq!(vehicles.len(), 3);
        assert_eq!(trip_ids(&vehicles[0]), vec![vec!["A", "D"]]);
        assert_eq!(trip_ids(&vehicles[1]), vec![vec!["B"]]);
        assert_eq!(trip_ids(&vehicles[2]), vec![vec!["C"]]);
    }

    #[test]
    fn test_unused_vehicles_dropped() {
        let batch = priced(&[Package::new("A", 10.0, 10.0)], 0.0);
        let vehicles = allocate(&batch, &config(5, 10.0, 100.0));
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].id(), 1);
        assert_eq!(vehicles[0].num_trips(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let vehicles = allocate(&[], &config(3, 10.0, 100.0));
        assert!(vehicles.is_empty());
    }

    #[test]
    fn test_new_trip_goes_to_earliest_vehicle() {
        // Both vehicles full after the first two; C goes to the one back first.
        let batch = priced(
            &[
                Package::new("A", 90.0, 100.0),
                Package::new("B", 80.0, 20.0),
                Package::new("C", 50.0, 10.0),
            ],
            0.0,
        );
        let vehicles = allocate(&batch, &config(2, 10.0, 100.0));
        assert_eq!(trip_ids(&vehicles[0]), vec![vec!["A"]]);
        assert_eq!(trip_ids(&vehicles[1]), vec![vec!["B"], vec!["C"]]);
        assert_eq!(vehicles[1].total_duration(), 3.0);
    }

    #[test]
    fn test_oversized_package_does_not_leave_empty_trip() {
        let batch = priced(
            &[Package::new("BIG", 150.0, 10.0), Package::new("SMALL", 50.0, 10.0)],
            0.0,
        );
        let vehicles = allocate(&batch, &config(1, 10.0, 100.0));
        assert_eq!(trip_ids(&vehicles[0]), vec![vec!["BIG"], vec!["SMALL"]]);
        let indices: Vec<_> = vehicles[0].trips().iter().map(|t| t.index()).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_every_package_placed_when_nothing_fits() {
        let batch = priced(
            &[
                Package::new("A", 150.0, 10.0),
                Package::new("B", 140.0, 10.0),
                Package::new("C", 130.0, 10.0),
            ],
            0.0,
        );
        let vehicles = allocate(&batch, &config(1, 10.0, 100.0));
        assert_eq!(vehicles.len(), 1);
        assert_eq!(
            trip_ids(&vehicles[0]),
            vec![vec!["A"], vec!["B"], vec!["C"]]
        );
        let indices: Vec<_> = vehicles[0].trips().iter().map(|t| t.index()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(vehicles[0].total_duration(), 3.0);
    }

    #[test]
    fn test_deterministic() {
        let batch = sample_batch();
        let cfg = config(2, 70.0, 200.0);
        assert_eq!(allocate(&batch, &cfg), allocate(&batch, &cfg));
    }

    fn batch_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
        prop::collection::vec((1u32..=200, 0u32..=300), 0..40)
    }

    proptest! {
        #[test]
        fn prop_allocation_invariants(
            raw in batch_strategy(),
            vehicle_count in 1usize..5,
            speed in 1u32..120,
        ) {
            let packages: Vec<Package> = raw
                .iter()
                .enumerate()
                .map(|(i, &(w, d))| Package::new(format!("P{i}"), w as f64, d as f64))
                .collect();
            let batch = priced(&packages, 100.0);
            let cfg = config(vehicle_count, speed as f64, 200.0);
            let vehicles = allocate(&batch, &cfg);

            // Sorted, non-empty, within fleet size.
            prop_assert!(vehicles.windows(2).all(|w| w[0].id() < w[1].id()));
            prop_assert!(vehicles.iter().all(|v| !v.is_empty()));
            prop_assert!(vehicles.iter().all(|v| v.id() >= 1 && v.id() <= vehicle_count));

            // Every package exactly once.
            let mut seen = HashSet::new();
            for v in &vehicles {
                for p in v.packages() {
                    prop_assert!(seen.insert(p.id().to_string()));
                }
            }
            prop_assert_eq!(seen.len(), packages.len());

            for v in &vehicles {
                let mut elapsed = 0.0;
                for (i, trip) in v.trips().iter().enumerate() {
                    prop_assert_eq!(trip.index(), i + 1);
                    prop_assert!(!trip.is_empty());
                    prop_assert!(trip.load() <= 200.0);
                    for p in trip.packages() {
                        elapsed += p.package.distance() / speed as f64;
                        prop_assert_eq!(p.trip_index, i + 1);
                        prop_assert_eq!(p.cumulative_delivery_time, round2(elapsed));
                    }
                }
                // Trip-wise and running sums may differ in the last ulp.
                prop_assert!((v.total_duration() - elapsed).abs() <= 0.005 + 1e-9);
            }

            prop_assert_eq!(allocate(&batch, &cfg), vehicles);
        }
    }
}
