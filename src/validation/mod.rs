//! Input validation.
//!
//! The pricing and scheduling engine itself never fails; these checks keep
//! malformed configs and packages out of it. An ineligible offer code is not
//! a validation failure, it simply earns no discount.

mod batch;
mod error;

pub use batch::{validate_batch, validate_package};
pub use error::{ConfigError, PackageError, ValidationError};
