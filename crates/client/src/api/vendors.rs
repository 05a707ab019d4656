//! Vendor management endpoints.
//!
//! Restrict/unrestrict surface their result to the caller like every other
//! operation - a failed toggle is an `Err`, never a silent no-op.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use mango_market_core::VendorId;

use crate::error::ApiError;
use crate::http::MarketClient;
use crate::types::{BankDetails, Location, UpiDetails, Vendor, VendorInfo};

use super::{Ack, LoginResponse};

/// Partial vendor update (admin edit screen). Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_info: Option<VendorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_details: Option<UpiDetails>,
}

impl MarketClient {
    /// List all vendors (admin view).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn vendors(&self) -> Result<Vec<Vendor>, ApiError> {
        self.get("/vendors").await
    }

    /// Fetch one vendor (admin view).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the vendor does not exist.
    #[instrument(skip(self), fields(vendor_id = %id))]
    pub async fn vendor(&self, id: &VendorId) -> Result<Vendor, ApiError> {
        self.get(&format!("/vendors/admin/{id}")).await
    }

    /// Update a vendor (admin edit).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self, update), fields(vendor_id = %id))]
    pub async fn update_vendor(
        &self,
        id: &VendorId,
        update: &VendorUpdate,
    ) -> Result<Ack, ApiError> {
        self.send_json(Method::PUT, &format!("/vendors/admin/{id}"), update)
            .await
    }

    /// Delete a vendor (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(vendor_id = %id))]
    pub async fn delete_vendor(&self, id: &VendorId) -> Result<Ack, ApiError> {
        self.send_empty(Method::DELETE, &format!("/vendors/admin/{id}"))
            .await
    }

    /// Restrict a vendor from transacting.
    ///
    /// # Errors
    ///
    /// Returns an error if the toggle fails; callers can rely on `Ok`
    /// meaning the backend accepted the change.
    #[instrument(skip(self), fields(vendor_id = %id))]
    pub async fn restrict_vendor(&self, id: &VendorId) -> Result<Ack, ApiError> {
        self.send_empty(Method::PUT, &format!("/vendors/restrict/{id}"))
            .await
    }

    /// Lift a vendor's restriction.
    ///
    /// # Errors
    ///
    /// Returns an error if the toggle fails.
    #[instrument(skip(self), fields(vendor_id = %id))]
    pub async fn unrestrict_vendor(&self, id: &VendorId) -> Result<Ack, ApiError> {
        self.send_empty(Method::PUT, &format!("/vendors/unrestrict/{id}"))
            .await
    }

    /// Update the calling vendor's own profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &VendorUpdate) -> Result<Ack, ApiError> {
        self.send_json(Method::PUT, "/vendors/me/profile", update)
            .await
    }

    /// Obtain a session for a vendor account (admin impersonation).
    ///
    /// Returns a fresh token/user pair the console may adopt as its active
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(vendor_id = %id))]
    pub async fn login_as_vendor(&self, id: &VendorId) -> Result<LoginResponse, ApiError> {
        self.send_empty(Method::POST, &format!("/vendors/admin-login-as-vendor/{id}"))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_update_serializes_only_set_fields() {
        let update = VendorUpdate {
            name: Some("Fresh Grocer".to_owned()),
            ..VendorUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Fresh Grocer" }));
    }
}
