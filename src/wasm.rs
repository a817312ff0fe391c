//! WebAssembly bindings for browser front-ends.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::dispatch::{DeliveryRequest, Dispatcher};
use crate::models::Package;
use crate::offers::OfferEngine;
use crate::pricing::CostCalculator;

/// Maps become plain objects, so flattened rows read like any JS object.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: for<'de> Deserialize<'de>>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Plans a `{ config, packages }` request and returns the delivery plan.
#[wasm_bindgen(js_name = planDelivery)]
pub fn plan_delivery(request: JsValue) -> Result<JsValue, JsError> {
    let request: DeliveryRequest = from_js(request)?;
    let plan = Dispatcher::new().plan_request(&request)?;
    to_js(&plan)
}

/// Offer codes a package with this weight and distance may choose.
#[wasm_bindgen(js_name = eligibleOffers)]
pub fn eligible_offers(weight: f64, distance: f64) -> Result<JsValue, JsError> {
    to_js(&OfferEngine::standard().eligible_offers(weight, distance))
}

/// Prices one package without scheduling it.
#[wasm_bindgen(js_name = priceQuote)]
pub fn price_quote(package: JsValue, base_cost: f64) -> Result<JsValue, JsError> {
    let package: Package = from_js(package)?;
    let offers = OfferEngine::standard();
    to_js(&CostCalculator::new(&offers).price(&package, base_cost))
}
