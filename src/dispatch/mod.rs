//! Batch planning entry point.

mod dispatcher;

pub use dispatcher::{DeliveryRequest, Dispatcher};
