//! Product and variation endpoints.

use reqwest::Method;
use tracing::instrument;

use mango_market_core::{ProductId, VariationId, VendorId};

use crate::error::ApiError;
use crate::forms::{ProductForm, VariationForm};
use crate::http::MarketClient;
use crate::types::Product;

use super::Ack;

impl MarketClient {
    /// List all products (admin catalog view).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/products").await
    }

    /// List one vendor's products.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(vendor_id = %vendor_id))]
    pub async fn vendor_products(&self, vendor_id: &VendorId) -> Result<Vec<Product>, ApiError> {
        self.get(&format!("/products/{vendor_id}")).await
    }

    /// Fetch one product with its variations.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the product does not exist.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.get(&format!("/single-product/{id}")).await
    }

    /// Create a product (multipart: payload plus new variation images).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the form fails client-side checks;
    /// no network call is made in that case.
    #[instrument(skip(self, form))]
    pub async fn create_product(&self, form: ProductForm) -> Result<Ack, ApiError> {
        let form = form.into_multipart()?;
        self.send_multipart(Method::POST, "/products", form).await
    }

    /// Update a product (multipart, same merge payload as create).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or any
    /// other variant for backend failures.
    #[instrument(skip(self, form), fields(product_id = %id))]
    pub async fn update_product(&self, id: &ProductId, form: ProductForm) -> Result<Ack, ApiError> {
        let form = form.into_multipart()?;
        self.send_multipart(Method::PUT, &format!("/products/{id}"), form)
            .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<Ack, ApiError> {
        self.send_empty(Method::DELETE, &format!("/products/{id}"))
            .await
    }

    /// Flip a product's storefront visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn toggle_product_visibility(&self, id: &ProductId) -> Result<Ack, ApiError> {
        self.send_empty(Method::PATCH, &format!("/products/{id}/toggle-visibility"))
            .await
    }

    /// Add a variation to a product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or any
    /// other variant for backend failures.
    #[instrument(skip(self, form), fields(product_id = %product_id))]
    pub async fn add_variation(
        &self,
        product_id: &ProductId,
        form: VariationForm,
    ) -> Result<Ack, ApiError> {
        let form = form.into_multipart()?;
        self.send_multipart(
            Method::POST,
            &format!("/products/{product_id}/variations"),
            form,
        )
        .await
    }

    /// Update one variation; the image payload carries exactly the union of
    /// kept URLs and newly added files.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or any
    /// other variant for backend failures.
    #[instrument(skip(self, form), fields(product_id = %product_id, variation_id = %variation_id))]
    pub async fn update_variation(
        &self,
        product_id: &ProductId,
        variation_id: &VariationId,
        form: VariationForm,
    ) -> Result<Ack, ApiError> {
        let form = form.into_multipart()?;
        self.send_multipart(
            Method::PUT,
            &format!("/products/{product_id}/variations/{variation_id}"),
            form,
        )
        .await
    }

    /// Delete one variation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(product_id = %product_id, variation_id = %variation_id))]
    pub async fn delete_variation(
        &self,
        product_id: &ProductId,
        variation_id: &VariationId,
    ) -> Result<Ack, ApiError> {
        self.send_empty(
            Method::DELETE,
            &format!("/products/{product_id}/variations/{variation_id}"),
        )
        .await
    }
}
