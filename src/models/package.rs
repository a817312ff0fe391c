//! Package and priced package types.

use serde::{Deserialize, Deserializer, Serialize};

/// A parcel submitted for delivery.
///
/// Weight is in kg and distance in km from the depot. The offer code is
/// whatever the customer chose; it is resolved against the offer table at
/// pricing time, so an unknown or ineligible code is not an error here.
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
///
/// let pkg = Package::new("PKG1", 50.0, 30.0).with_offer_code("OFR001");
/// assert_eq!(pkg.id(), "PKG1");
/// assert_eq!(pkg.offer_code(), Some("OFR001"));
///
/// let plain = Package::new("PKG2", 10.0, 5.0).with_offer_code("  ");
/// assert_eq!(plain.offer_code(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    id: String,
    weight: f64,
    distance: f64,
    #[serde(
        default,
        alias = "offer",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_offer_code"
    )]
    offer_code: Option<String>,
}

impl Package {
    /// Creates a package without an offer code.
    pub fn new(id: impl Into<String>, weight: f64, distance: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            distance,
            offer_code: None,
        }
    }

    /// Sets the offer code. Blank codes mean "no offer".
    pub fn with_offer_code(mut self, code: impl AsRef<str>) -> Self {
        self.offer_code = normalize_offer_code(code.as_ref());
        self
    }

    /// Package ID, unique within a batch.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Weight in kg.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Delivery distance in km.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Offer code chosen for this package, if any.
    pub fn offer_code(&self) -> Option<&str> {
        self.offer_code.as_deref()
    }
}

fn normalize_offer_code(code: &str) -> Option<String> {
    let code = code.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_string())
    }
}

fn deserialize_offer_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(normalize_offer_code))
}

/// A package with its delivery cost and discount resolved.
///
/// All money values are rounded to 2 decimals, and
/// `total_cost == raw_cost - discount` holds on the rounded values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedPackage {
    #[serde(flatten)]
    package: Package,
    raw_cost: f64,
    discount: f64,
    total_cost: f64,
}

impl PricedPackage {
    pub(crate) fn new(package: Package, raw_cost: f64, discount: f64, total_cost: f64) -> Self {
        Self {
            package,
            raw_cost,
            discount,
            total_cost,
        }
    }

    /// The underlying package.
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Package ID.
    pub fn id(&self) -> &str {
        self.package.id()
    }

    /// Weight in kg.
    pub fn weight(&self) -> f64 {
        self.package.weight()
    }

    /// Delivery distance in km.
    pub fn distance(&self) -> f64 {
        self.package.distance()
    }

    /// Offer code chosen for this package, if any.
    pub fn offer_code(&self) -> Option<&str> {
        self.package.offer_code()
    }

    /// Cost before discount.
    pub fn raw_cost(&self) -> f64 {
        self.raw_cost
    }

    /// Discount amount.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Cost after discount.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}
