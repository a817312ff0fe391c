//! Batch validation error types.

use thiserror::Error;

/// A fleet configuration that the scheduler cannot run with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("vehicle count must be at least 1")]
    NoVehicles,

    #[error("max speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("max carry weight must be positive and finite, got {0}")]
    InvalidCapacity(f64),

    #[error("base cost must be non-negative and finite, got {0}")]
    InvalidBaseCost(f64),
}

/// A package that cannot be priced or scheduled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackageError {
    #[error("package id must not be empty")]
    EmptyId,

    #[error("package {id}: weight must be positive and finite, got {weight}")]
    InvalidWeight { id: String, weight: f64 },

    #[error("package {id}: distance must be non-negative and finite, got {distance}")]
    InvalidDistance { id: String, distance: f64 },

    #[error("package {0} appears more than once in the batch")]
    DuplicateId(String),

    #[error("package {id}: weight {weight} exceeds max carry weight {capacity}")]
    ExceedsCapacity {
        id: String,
        weight: f64,
        capacity: f64,
    },
}

/// Any reason a batch is rejected before pricing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid fleet config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid package: {0}")]
    Package(#[from] PackageError),
}
