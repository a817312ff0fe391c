//! Validate → price → allocate pipeline.

use serde::Deserialize;
use tracing::info;

use crate::models::{DeliveryPlan, FleetConfig, Package};
use crate::offers::OfferEngine;
use crate::pricing::CostCalculator;
use crate::scheduling::allocate;
use crate::validation::{validate_batch, ValidationError};

/// A fleet configuration and the packages to deliver with it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRequest {
    /// Fleet parameters for this batch.
    pub config: FleetConfig,
    /// Packages in submission order.
    #[serde(default)]
    pub packages: Vec<Package>,
}

/// Runs a batch through validation, pricing, and scheduling.
///
/// Holds no state between batches; one dispatcher can serve any number of
/// `plan` calls, including from several threads.
///
/// # Examples
///
/// ```
/// use u_courier::dispatch::Dispatcher;
/// use u_courier::models::{FleetConfig, Package};
///
/// let config = FleetConfig::new(10.0, 2, 70.0, 200.0).unwrap();
/// let packages = vec![
///     Package::new("PKG1", 50.0, 30.0).with_offer_code("OFR001"),
///     Package::new("PKG4", 110.0, 60.0).with_offer_code("OFR002"),
/// ];
///
/// let plan = Dispatcher::new().plan(&packages, &config).unwrap();
/// assert_eq!(plan.priced_packages()[1].total_cost(), 1311.3);
/// assert_eq!(plan.num_scheduled(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    offers: OfferEngine,
}

impl Dispatcher {
    /// Creates a dispatcher using the standard offer table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the offer table.
    pub fn with_offers(mut self, offers: OfferEngine) -> Self {
        self.offers = offers;
        self
    }

    /// The offer table used for pricing.
    pub fn offers(&self) -> &OfferEngine {
        &self.offers
    }

    /// Validates, prices, and schedules a batch.
    pub fn plan(
        &self,
        packages: &[Package],
        config: &FleetConfig,
    ) -> Result<DeliveryPlan, ValidationError> {
        validate_batch(packages, config)?;

        let priced = CostCalculator::new(&self.offers).price_all(packages, config.base_cost());
        let vehicles = allocate(&priced, config);
        let plan = DeliveryPlan::new(priced, vehicles);

        info!(
            packages = packages.len(),
            vehicles_used = plan.vehicles().len(),
            completion_time = plan.completion_time(),
            "delivery plan ready"
        );
        Ok(plan)
    }

    /// Plans a deserialized request.
    pub fn plan_request(&self, request: &DeliveryRequest) -> Result<DeliveryPlan, ValidationError> {
        self.plan(&request.packages, &request.config)
    }
}
