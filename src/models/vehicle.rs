//! Vehicle delivery schedule.

use serde::Serialize;

use super::{ScheduledPackage, Trip};

/// A vehicle and the trips it was assigned.
///
/// Vehicle IDs are 1-based. Trips are stored in the order they were opened,
/// so `trips()[i].index() == i + 1`.
///
/// # Examples
///
/// ```
/// use u_courier::models::{Trip, Vehicle};
///
/// let mut v = Vehicle::new(1);
/// v.push_trip(Trip::new(1));
/// assert_eq!(v.id(), 1);
/// assert_eq!(v.num_trips(), 1);
/// assert_eq!(v.num_packages(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    id: usize,
    trips: Vec<Trip>,
    total_duration: f64,
}

impl Vehicle {
    /// Creates a vehicle with no trips.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            trips: Vec::new(),
            total_duration: 0.0,
        }
    }

    /// Appends a trip.
    pub fn push_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Vehicle ID (1-based).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Trips in the order they were made.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Number of trips.
    pub fn num_trips(&self) -> usize {
        self.trips.len()
    }

    /// Total number of packages across all trips.
    pub fn num_packages(&self) -> usize {
        self.trips.iter().map(|t| t.len()).sum()
    }

    /// Returns `true` if no package was assigned.
    pub fn is_empty(&self) -> bool {
        self.num_packages() == 0
    }

    /// All packages in delivery order.
    pub fn packages(&self) -> impl Iterator<Item = &ScheduledPackage> {
        self.trips.iter().flat_map(|t| t.packages())
    }

    /// Sum of trip durations (set by scheduler).
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Sets the total duration (used by scheduler).
    pub fn set_total_duration(&mut self, d: f64) {
        self.total_duration = d;
    }
}
