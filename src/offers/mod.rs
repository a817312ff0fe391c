//! Promotional offer rules.
//!
//! Offers are data, not code: each [`OfferRule`] is a row in a table
//! consulted by [`OfferEngine`]. Adding an offer means adding a row.

mod engine;
mod rule;

pub use engine::{OfferEngine, STANDARD_OFFERS};
pub use rule::{Interval, OfferRule};
