//! Wire-shaped types shared across the workspace.
//!
//! These mirror the JSON payloads delivered by the payment request API:
//! one `ServiceItemCard` per priced line item, each carrying the bag of
//! pricing parameters produced by the backend pricing run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fact supplied by the pricing backend, always transmitted as a string.
///
/// Keys are unique within one service item's parameter collection; the
/// collection itself is unordered. `id`, `origin`, and `eTag` are inert
/// passthrough metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItemParam {
    pub key: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
}

impl ServiceItemParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            id: None,
            origin: None,
            e_tag: None,
        }
    }
}

/// Review status of a payment service item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceItemStatus {
    Requested,
    Approved,
    Denied,
}

/// Shipment type attached to a service item, when the item is tied to a
/// shipment at all. The NTS-release variant changes the pickup-date caption
/// in pricing breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentType {
    #[serde(rename = "HHG")]
    Hhg,
    #[serde(rename = "HHG_LONGHAUL_DOMESTIC")]
    HhgLonghaulDomestic,
    #[serde(rename = "HHG_SHORTHAUL_DOMESTIC")]
    HhgShorthaulDomestic,
    #[serde(rename = "HHG_INTO_NTS_DOMESTIC")]
    Nts,
    #[serde(rename = "HHG_OUTOF_NTS_DOMESTIC")]
    NtsRelease,
    #[serde(rename = "PPM")]
    Ppm,
}

impl ShipmentType {
    pub fn is_nts_release(self) -> bool {
        matches!(self, ShipmentType::NtsRelease)
    }
}

/// Service item pricing code. Selects the calculation plan for an item.
///
/// Codes the backend may send but this engine has no breakdown for
/// (move management, counseling, anything future) deserialize to `Unknown`
/// and produce an empty plan rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceItemCode {
    /// Domestic linehaul
    DLH,
    /// Domestic shorthaul
    DSH,
    /// Fuel surcharge
    FSC,
    /// Domestic origin SIT fuel surcharge
    DOSFSC,
    /// Domestic destination SIT fuel surcharge
    DDSFSC,
    /// Domestic origin price
    DOP,
    /// Domestic destination price
    DDP,
    /// Domestic origin 1st day SIT
    DOFSIT,
    /// Domestic destination 1st day SIT
    DDFSIT,
    /// Domestic origin additional days SIT
    DOASIT,
    /// Domestic destination additional days SIT
    DDASIT,
    /// Domestic origin SIT pickup
    DOPSIT,
    /// Domestic destination SIT delivery
    DDDSIT,
    /// Domestic packing
    DPK,
    /// Domestic NTS packing
    DNPK,
    /// Domestic unpacking
    DUPK,
    /// Domestic crating
    DCRT,
    /// Domestic uncrating
    DUCRT,
    /// Domestic origin shuttle service
    DOSHUT,
    /// Domestic destination shuttle service
    DDSHUT,
    /// International shipping and linehaul
    ISLH,
    /// International HHG packing
    IHPK,
    /// International HHG unpacking
    IHUPK,
    /// International crating
    ICRT,
    /// International uncrating
    IUCRT,
    /// Move management (basic, no breakdown)
    MS,
    /// Counseling services (basic, no breakdown)
    CS,
    #[serde(other)]
    Unknown,
}

impl ServiceItemCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceItemCode::DLH => "DLH",
            ServiceItemCode::DSH => "DSH",
            ServiceItemCode::FSC => "FSC",
            ServiceItemCode::DOSFSC => "DOSFSC",
            ServiceItemCode::DDSFSC => "DDSFSC",
            ServiceItemCode::DOP => "DOP",
            ServiceItemCode::DDP => "DDP",
            ServiceItemCode::DOFSIT => "DOFSIT",
            ServiceItemCode::DDFSIT => "DDFSIT",
            ServiceItemCode::DOASIT => "DOASIT",
            ServiceItemCode::DDASIT => "DDASIT",
            ServiceItemCode::DOPSIT => "DOPSIT",
            ServiceItemCode::DDDSIT => "DDDSIT",
            ServiceItemCode::DPK => "DPK",
            ServiceItemCode::DNPK => "DNPK",
            ServiceItemCode::DUPK => "DUPK",
            ServiceItemCode::DCRT => "DCRT",
            ServiceItemCode::DUCRT => "DUCRT",
            ServiceItemCode::DOSHUT => "DOSHUT",
            ServiceItemCode::DDSHUT => "DDSHUT",
            ServiceItemCode::ISLH => "ISLH",
            ServiceItemCode::IHPK => "IHPK",
            ServiceItemCode::IHUPK => "IHUPK",
            ServiceItemCode::ICRT => "ICRT",
            ServiceItemCode::IUCRT => "IUCRT",
            ServiceItemCode::MS => "MS",
            ServiceItemCode::CS => "CS",
            ServiceItemCode::Unknown => "UNKNOWN",
        }
    }
}

/// Extra per-item data that does not travel in the parameter collection.
/// Today that is only the customer-facing description used by crating items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalServiceItemData {
    #[serde(default)]
    pub description: String,
}

/// A single priced line item under review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItemCard {
    pub id: String,
    #[serde(rename = "mtoServiceItemCode")]
    pub code: ServiceItemCode,
    #[serde(rename = "mtoServiceItemName")]
    pub name: String,
    /// Requested amount in decimal dollars, as delivered by the API.
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceItemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        rename = "mtoShipmentID",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipment_id: Option<String>,
    #[serde(
        default,
        rename = "mtoShipmentType",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipment_type: Option<ShipmentType>,
    #[serde(default, rename = "paymentServiceItemParams")]
    pub params: Vec<ServiceItemParam>,
}

impl ServiceItemCard {
    /// A "basic" item applies at the move level and has no shipment.
    pub fn is_basic(&self) -> bool {
        self.shipment_id.is_none()
    }

    /// The item's requested amount in whole cents.
    pub fn amount_cents(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }
}
