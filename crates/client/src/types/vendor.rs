//! Vendor account types.

use mango_market_core::VendorId;
use serde::{Deserialize, Serialize};

/// A marketplace seller account, scoped to its own products, categories, and
/// orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(rename = "_id")]
    pub id: VendorId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub vendor_info: Option<VendorInfo>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub bank_details: Option<BankDetails>,
    #[serde(default)]
    pub upi_details: Option<UpiDetails>,
    /// Restricted vendors stay listed but cannot transact.
    #[serde(default)]
    pub is_restricted: bool,
}

/// Shop-facing vendor details, nested under `vendorInfo` on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorInfo {
    pub shop_name: String,
    #[serde(default)]
    pub shop_description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Geocoded location with the vendor's service area.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: Address,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
}

/// Postal address. `postal_codes` is the list of codes the vendor serves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_codes: Vec<String>,
}

/// Geocoding result attached to an address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Bank account details for vendor payouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_holder: String,
    pub account_number: String,
    pub ifsc: String,
}

/// UPI details for vendor payouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiDetails {
    pub upi_id: String,
}
