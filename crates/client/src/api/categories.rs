//! Category endpoints.
//!
//! Two parallel resources share one client surface: the global catalog
//! categories and the vendor-scoped variant.

use reqwest::Method;
use tracing::instrument;

use mango_market_core::CategoryId;

use crate::error::ApiError;
use crate::forms::CategoryForm;
use crate::http::MarketClient;
use crate::types::Category;

use super::Ack;

/// Which category resource a call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    /// Platform-wide categories managed by admins.
    Global,
    /// Categories owned by the calling vendor.
    Vendor,
}

impl CategoryScope {
    /// Base path of the scoped resource.
    #[must_use]
    pub const fn base_path(self) -> &'static str {
        match self {
            Self::Global => "/category",
            Self::Vendor => "/vendor-product-category",
        }
    }
}

impl MarketClient {
    /// List categories in a scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn categories(&self, scope: CategoryScope) -> Result<Vec<Category>, ApiError> {
        self.get(scope.base_path()).await
    }

    /// Fetch one category.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the category does not exist.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn category(
        &self,
        scope: CategoryScope,
        id: &CategoryId,
    ) -> Result<Category, ApiError> {
        self.get(&format!("{}/{id}", scope.base_path())).await
    }

    /// Create a category (multipart: payload plus image).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or any
    /// other variant for backend failures.
    #[instrument(skip(self, form))]
    pub async fn create_category(
        &self,
        scope: CategoryScope,
        form: CategoryForm,
    ) -> Result<Ack, ApiError> {
        let form = form.into_multipart()?;
        self.send_multipart(Method::POST, scope.base_path(), form)
            .await
    }

    /// Update a category; the image payload carries the kept URL or the
    /// replacement file.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or any
    /// other variant for backend failures.
    #[instrument(skip(self, form), fields(category_id = %id))]
    pub async fn update_category(
        &self,
        scope: CategoryScope,
        id: &CategoryId,
        form: CategoryForm,
    ) -> Result<Ack, ApiError> {
        let form = form.into_multipart()?;
        self.send_multipart(Method::PUT, &format!("{}/{id}", scope.base_path()), form)
            .await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete_category(
        &self,
        scope: CategoryScope,
        id: &CategoryId,
    ) -> Result<Ack, ApiError> {
        self.send_empty(Method::DELETE, &format!("{}/{id}", scope.base_path()))
            .await
    }
}
