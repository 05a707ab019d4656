//! Customer endpoints.
//!
//! Like the vendor toggles, restrict/unrestrict return a `Result` so the
//! console can tell a rejected toggle from a successful one.

use reqwest::Method;
use tracing::instrument;

use mango_market_core::CustomerId;

use crate::error::ApiError;
use crate::http::MarketClient;
use crate::types::Customer;

use super::Ack;

impl MarketClient {
    /// List all customers (admin view).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.get("/customers").await
    }

    /// Restrict a customer from ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if the toggle fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn restrict_customer(&self, id: &CustomerId) -> Result<Ack, ApiError> {
        self.send_empty(Method::PUT, &format!("/customers/restrict/{id}"))
            .await
    }

    /// Lift a customer's restriction.
    ///
    /// # Errors
    ///
    /// Returns an error if the toggle fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn unrestrict_customer(&self, id: &CustomerId) -> Result<Ack, ApiError> {
        self.send_empty(Method::PUT, &format!("/customers/unrestrict/{id}"))
            .await
    }
}
