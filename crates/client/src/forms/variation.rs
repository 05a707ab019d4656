//! Variation create/edit form.

use mango_market_core::{ImageSource, partition_images};
use reqwest::multipart::Form;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ApiError, ValidationError};
use crate::types::VariationAttributes;

use super::images::attach_images;
use super::validate::check_uploads;

/// A variation as edited in the console: attribute set, pricing, stock, and
/// a mixed image list (stored URLs plus newly selected files).
#[derive(Debug, Clone)]
pub struct VariationForm {
    pub attributes: VariationAttributes,
    pub price: Decimal,
    /// Discount percentage (0-100).
    pub discount: Decimal,
    pub quantity: u32,
    pub images: Vec<ImageSource>,
}

/// Non-image fields, serialized as JSON into the `payload` part.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VariationPayload<'a> {
    pub attributes: &'a VariationAttributes,
    pub price: Decimal,
    pub discount: Decimal,
    pub quantity: u32,
}

impl VariationForm {
    /// Validate the form, first violation wins.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.price < Decimal::ZERO {
            return Err(ValidationError::new("price", "must not be negative"));
        }
        if self.discount < Decimal::ZERO || self.discount > Decimal::ONE_HUNDRED {
            return Err(ValidationError::new("discount", "must be between 0 and 100"));
        }
        check_uploads(
            "images",
            self.images.iter().filter_map(|image| match image {
                ImageSource::Upload(upload) => Some(upload),
                ImageSource::Url(_) => None,
            }),
        )?;
        Ok(())
    }

    pub(crate) fn payload(&self) -> VariationPayload<'_> {
        VariationPayload {
            attributes: &self.attributes,
            price: self.price,
            discount: self.discount,
            quantity: self.quantity,
        }
    }

    /// Validate and build the multipart submission.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or
    /// `ApiError::Parse` if the payload cannot be serialized.
    pub fn into_multipart(self) -> Result<Form, ApiError> {
        self.validate()?;

        let payload = serde_json::to_string(&self.payload())
            .map_err(|e| ApiError::Parse(format!("Failed to serialize variation: {e}")))?;
        let form = Form::new().text("payload", payload);
        attach_images(form, partition_images(&self.images))
    }
}
