//! Package and batch checks run before pricing.

use std::collections::HashSet;

use tracing::warn;

use super::{PackageError, ValidationError};
use crate::models::{FleetConfig, Package};

/// Checks a single package's fields.
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
/// use u_courier::validation::{validate_package, PackageError};
///
/// assert!(validate_package(&Package::new("PKG1", 5.0, 0.0)).is_ok());
/// assert_eq!(
///     validate_package(&Package::new("", 5.0, 5.0)),
///     Err(PackageError::EmptyId)
/// );
/// ```
pub fn validate_package(package: &Package) -> Result<(), PackageError> {
    if package.id().trim().is_empty() {
        return Err(PackageError::EmptyId);
    }
    let weight = package.weight();
    if !weight.is_finite() || weight <= 0.0 {
        return Err(PackageError::InvalidWeight {
            id: package.id().to_string(),
            weight,
        });
    }
    let distance = package.distance();
    if !distance.is_finite() || distance < 0.0 {
        return Err(PackageError::InvalidDistance {
            id: package.id().to_string(),
            distance,
        });
    }
    Ok(())
}

/// Checks every package in a batch against the fleet.
///
/// Beyond per-package checks, IDs must be unique and every package must fit
/// a single trip. Stops at the first problem found, in input order.
pub fn validate_batch(packages: &[Package], config: &FleetConfig) -> Result<(), ValidationError> {
    let mut ids = HashSet::with_capacity(packages.len());
    for package in packages {
        check_package(package, config, &mut ids).inspect_err(|e| {
            warn!(package = package.id(), error = %e, "batch rejected");
        })?;
    }
    Ok(())
}

fn check_package<'a>(
    package: &'a Package,
    config: &FleetConfig,
    ids: &mut HashSet<&'a str>,
) -> Result<(), PackageError> {
    validate_package(package)?;
    if !ids.insert(package.id()) {
        return Err(PackageError::DuplicateId(package.id().to_string()));
    }
    if package.weight() > config.max_carry_weight() {
        return Err(PackageError::ExceedsCapacity {
            id: package.id().to_string(),
            weight: package.weight(),
            capacity: config.max_carry_weight(),
        });
    }
    Ok(())
}
