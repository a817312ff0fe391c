//! Domain model types for courier delivery.
//!
//! Provides packages and their priced form, the per-batch fleet
//! configuration, and the schedule types produced by allocation: vehicles
//! own trips, trips own scheduled packages.

mod fleet;
mod package;
mod plan;
mod trip;
mod vehicle;

pub use fleet::FleetConfig;
pub use package::{Package, PricedPackage};
pub use plan::DeliveryPlan;
pub use trip::{ScheduledPackage, Trip};
pub use vehicle::Vehicle;
