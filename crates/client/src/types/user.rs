//! Session user and customer types.

use mango_market_core::{CustomerId, UserRole, VendorId};
use serde::{Deserialize, Serialize};

use super::vendor::{BankDetails, Location, UpiDetails, VendorInfo};

/// The logged-in console account, as returned by the login endpoint and
/// persisted with the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: VendorId,
    pub role: UserRole,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub vendor_info: Option<VendorInfo>,
    /// URLs of the documents uploaded at signup.
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub bank_details: Option<BankDetails>,
    #[serde(default)]
    pub upi_details: Option<UpiDetails>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl User {
    /// Whether this account may touch the admin-only payout lanes.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// A marketplace customer, as listed in the admin console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_restricted: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_round_trip() {
        let json = serde_json::json!({
            "_id": "u1",
            "role": "vendor",
            "name": "Asha",
            "email": "asha@example.com",
            "documents": ["https://cdn.example.com/doc1.jpg"]
        });

        let user: User = serde_json::from_value(json).unwrap();
        assert!(!user.is_admin());
        assert_eq!(user.documents.len(), 1);

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["_id"], "u1");
        assert_eq!(back["role"], "vendor");
    }

    #[test]
    fn test_admin_role() {
        let json = serde_json::json!({
            "_id": "u2",
            "role": "admin",
            "name": "Root",
            "email": "root@example.com"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert!(user.is_admin());
    }
}
