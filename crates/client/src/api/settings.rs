//! Marketplace settings endpoints.

use reqwest::Method;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::MarketClient;
use crate::types::StoreSettings;

use super::Ack;

impl MarketClient {
    /// Fetch the platform settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn settings(&self) -> Result<StoreSettings, ApiError> {
        self.get("/settings").await
    }

    /// Update platform settings; only the set fields are sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self, update))]
    pub async fn update_settings(&self, update: &StoreSettings) -> Result<Ack, ApiError> {
        self.send_json(Method::PUT, "/settings", update).await
    }
}
