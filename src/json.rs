//! JSON request/response boundary.
//!
//! Lets a presentation layer hand over a whole batch as one JSON document
//! and get the priced and scheduled plan back the same way.

use thiserror::Error;

use crate::dispatch::{DeliveryRequest, Dispatcher};
use crate::offers::OfferEngine;
use crate::validation::ValidationError;

/// Errors from the JSON boundary.
#[derive(Error, Debug)]
pub enum JsonError {
    #[error("malformed request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to encode plan: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Plans a JSON-encoded [`DeliveryRequest`] with the standard offer table
/// and returns the JSON-encoded plan.
///
/// # Examples
///
/// ```
/// let out = u_courier::json::plan_from_str(r#"{
///     "config": {"baseCost": 100, "vehicleCount": 1, "maxSpeed": 50, "maxCarryWeight": 100},
///     "packages": [{"id": "PKG1", "weight": 10, "distance": 100, "offerCode": "OFR003"}]
/// }"#).unwrap();
/// assert!(out.contains("\"totalCost\":665.0"));
/// ```
pub fn plan_from_str(input: &str) -> Result<String, JsonError> {
    let request: DeliveryRequest = serde_json::from_str(input)?;
    let plan = Dispatcher::new().plan_request(&request)?;
    serde_json::to_string(&plan).map_err(JsonError::Encode)
}

/// Lists standard offer codes a package may choose, as a JSON array.
pub fn eligible_offers_json(weight: f64, distance: f64) -> String {
    let codes = OfferEngine::standard().eligible_offers(weight, distance);
    serde_json::Value::from(codes).to_string()
}
