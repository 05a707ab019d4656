//! Driver endpoints.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use mango_market_core::{DriverApprovalStatus, DriverId};

use crate::error::ApiError;
use crate::forms::DriverOnboardingForm;
use crate::http::MarketClient;
use crate::types::Driver;

use super::Ack;

#[derive(Debug, Serialize)]
struct DriverStatusRequest {
    status: DriverApprovalStatus,
}

impl MarketClient {
    /// Onboard a new driver (multipart: details plus document photos).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the form fails client-side checks;
    /// no network call is made in that case.
    #[instrument(skip(self, form), fields(name = %form.personal_details.name))]
    pub async fn create_driver(&self, form: DriverOnboardingForm) -> Result<Ack, ApiError> {
        let form = form.into_multipart()?;
        self.send_multipart(Method::POST, "/create-driver", form)
            .await
    }

    /// List all drivers (admin view).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn drivers(&self) -> Result<Vec<Driver>, ApiError> {
        self.get("/drivers").await
    }

    /// Set a driver's approval status.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self), fields(driver_id = %id, status = %status))]
    pub async fn set_driver_status(
        &self,
        id: &DriverId,
        status: DriverApprovalStatus,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/driver/{id}/status"),
            &DriverStatusRequest { status },
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_request_wire_shape() {
        let body = serde_json::to_value(DriverStatusRequest {
            status: DriverApprovalStatus::Suspended,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "suspended" }));
    }
}
