//! Fleet scheduling: assigning priced packages to vehicles and trips.
//!
//! - [`allocate`] — Greedy earliest-available, capacity-split multi-trip assignment, O(n log n + n·v)

mod greedy;

pub use greedy::{allocate, loading_order};
