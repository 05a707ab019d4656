//! Banner endpoints.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use mango_market_core::BannerId;

use crate::error::ApiError;
use crate::forms::BannerForm;
use crate::http::MarketClient;
use crate::types::Banner;

use super::Ack;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BannerActiveRequest {
    is_active: bool,
}

impl MarketClient {
    /// List all banners.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn banners(&self) -> Result<Vec<Banner>, ApiError> {
        self.get("/banner").await
    }

    /// Create a banner (multipart: payload plus image).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or any
    /// other variant for backend failures.
    #[instrument(skip(self, form))]
    pub async fn create_banner(&self, form: BannerForm) -> Result<Ack, ApiError> {
        let form = form.into_multipart()?;
        self.send_multipart(Method::POST, "/banner", form).await
    }

    /// Update a banner; the image payload carries the kept URL or the
    /// replacement file.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or any
    /// other variant for backend failures.
    #[instrument(skip(self, form), fields(banner_id = %id))]
    pub async fn update_banner(&self, id: &BannerId, form: BannerForm) -> Result<Ack, ApiError> {
        let form = form.into_multipart()?;
        self.send_multipart(Method::PUT, &format!("/banner/{id}"), form)
            .await
    }

    /// Delete a banner.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(banner_id = %id))]
    pub async fn delete_banner(&self, id: &BannerId) -> Result<Ack, ApiError> {
        self.send_empty(Method::DELETE, &format!("/banner/{id}"))
            .await
    }

    /// Toggle whether a banner is shown on the storefront.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self), fields(banner_id = %id, is_active))]
    pub async fn set_banner_active(&self, id: &BannerId, is_active: bool) -> Result<Ack, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/banner-active/{id}"),
            &BannerActiveRequest { is_active },
        )
        .await
    }
}
