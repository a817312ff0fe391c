//! # u-courier
//!
//! Courier delivery costing and fleet scheduling: promotional offer rules,
//! discounted package pricing, and greedy multi-trip vehicle assignment
//! with delivery time estimates.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Package, FleetConfig, Vehicle, Trip, DeliveryPlan)
//! - [`offers`] — Offer rule table and eligibility lookup
//! - [`pricing`] — Cost calculation with offer discounts
//! - [`scheduling`] — Greedy capacity-split vehicle allocation
//! - [`validation`] — Config and package checks run before the engine
//! - [`dispatch`] — Validate → price → allocate pipeline
//! - `json` — JSON request/response boundary (feature `json`)
//! - `wasm` — WebAssembly bindings (feature `wasm`)

pub mod dispatch;
pub mod models;
pub mod offers;
pub mod pricing;
pub mod scheduling;
pub mod validation;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "wasm")]
pub mod wasm;
