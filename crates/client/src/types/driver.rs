//! Delivery driver types.

use mango_market_core::{DriverApprovalStatus, DriverId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A delivery driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(rename = "_id")]
    pub id: DriverId,
    pub personal_details: PersonalDetails,
    pub vehicle_details: VehicleDetails,
    #[serde(default)]
    pub approval_status: DriverApprovalStatus,
    /// URLs of the documents uploaded at onboarding.
    #[serde(default)]
    pub documents: Vec<String>,
    /// Cash-on-delivery funds held before remitting to the platform.
    /// Maintained server-side; settling the floating-cash lane deducts from
    /// it there.
    #[serde(default)]
    pub floating_cash: Decimal,
}

/// Identity section of a driver record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Vehicle section of a driver record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    pub registration_number: String,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_deserializes_wire_shape() {
        let json = serde_json::json!({
            "_id": "d1",
            "personalDetails": { "name": "Kiran", "phone": "5550123" },
            "vehicleDetails": { "registrationNumber": "MH12AB1234", "vehicleType": "bike" },
            "approvalStatus": "approved",
            "floatingCash": "350.00"
        });

        let driver: Driver = serde_json::from_value(json).unwrap();
        assert_eq!(driver.approval_status, DriverApprovalStatus::Approved);
        assert_eq!(driver.personal_details.name, "Kiran");
        assert_eq!(driver.floating_cash, Decimal::new(35000, 2));
    }

    #[test]
    fn test_driver_approval_defaults_pending() {
        let json = serde_json::json!({
            "_id": "d2",
            "personalDetails": { "name": "New", "phone": "5550124" },
            "vehicleDetails": { "registrationNumber": "MH12CD5678" }
        });
        let driver: Driver = serde_json::from_value(json).unwrap();
        assert_eq!(driver.approval_status, DriverApprovalStatus::Pending);
    }
}
