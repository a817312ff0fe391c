//! Fleet configuration.

use serde::{Deserialize, Serialize};

use crate::validation::ConfigError;

/// Per-batch fleet parameters, shared by every vehicle.
///
/// Construction validates the values, so a `FleetConfig` in hand is always
/// usable by the scheduler. Deserialization goes through the same check.
///
/// # Examples
///
/// ```
/// use u_courier::models::FleetConfig;
///
/// let config = FleetConfig::new(100.0, 2, 70.0, 200.0).unwrap();
/// assert_eq!(config.vehicle_count(), 2);
/// assert_eq!(config.transit_time(140.0), 2.0);
///
/// assert!(FleetConfig::new(100.0, 0, 70.0, 200.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "FleetConfigData")]
pub struct FleetConfig {
    base_cost: f64,
    vehicle_count: usize,
    max_speed: f64,
    max_carry_weight: f64,
}

impl FleetConfig {
    /// Creates a validated configuration.
    pub fn new(
        base_cost: f64,
        vehicle_count: usize,
        max_speed: f64,
        max_carry_weight: f64,
    ) -> Result<Self, ConfigError> {
        if vehicle_count == 0 {
            return Err(ConfigError::NoVehicles);
        }
        if !max_speed.is_finite() || max_speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(max_speed));
        }
        if !max_carry_weight.is_finite() || max_carry_weight <= 0.0 {
            return Err(ConfigError::InvalidCapacity(max_carry_weight));
        }
        if !base_cost.is_finite() || base_cost < 0.0 {
            return Err(ConfigError::InvalidBaseCost(base_cost));
        }
        Ok(Self {
            base_cost,
            vehicle_count,
            max_speed,
            max_carry_weight,
        })
    }

    /// Base delivery cost charged per package.
    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    /// Number of identical vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Vehicle speed in km/h.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Maximum total weight per trip, in kg.
    pub fn max_carry_weight(&self) -> f64 {
        self.max_carry_weight
    }

    /// Unrounded one-way transit time for a distance, in hours.
    pub fn transit_time(&self, distance: f64) -> f64 {
        distance / self.max_speed
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FleetConfigData {
    base_cost: f64,
    vehicle_count: usize,
    max_speed: f64,
    max_carry_weight: f64,
}

impl TryFrom<FleetConfigData> for FleetConfig {
    type Error = ConfigError;

    fn try_from(data: FleetConfigData) -> Result<Self, Self::Error> {
        Self::new(
            data.base_cost,
            data.vehicle_count,
            data.max_speed,
            data.max_carry_weight,
        )
    }
}
