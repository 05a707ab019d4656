//! Product create/edit form.
//!
//! A product owns an array of variations; each variation carries its own
//! mixed image list. The submission serializes all non-image fields (with
//! each variation's kept URLs inlined) into the `payload` part, and appends
//! every new file under `variationImages[{index}]` so the backend can route
//! uploads back to their variation.

use mango_market_core::{CategoryId, partition_images};
use reqwest::multipart::Form;
use serde::Serialize;
use tracing::instrument;

use crate::error::{ApiError, ValidationError};

use super::images::file_part;
use super::validate::require;
use super::variation::VariationForm;

/// A product as composed in the console.
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub category: CategoryId,
    pub tags: Vec<String>,
    pub is_return_allowed: bool,
    pub is_visible: bool,
    pub variations: Vec<VariationForm>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductPayload<'a> {
    name: &'a str,
    description: &'a str,
    category: &'a CategoryId,
    tags: &'a [String],
    is_return_allowed: bool,
    is_visible: bool,
    variations: Vec<ProductVariationPayload<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductVariationPayload<'a> {
    #[serde(flatten)]
    fields: super::variation::VariationPayload<'a>,
    /// The variation's surviving stored-image URLs, unchanged and in order.
    existing_images: Vec<String>,
}

impl ProductForm {
    /// Validate the form, first violation wins.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("category", self.category.as_str())?;
        if self.variations.is_empty() {
            return Err(ValidationError::new(
                "variations",
                "at least one variation is required",
            ));
        }
        for variation in &self.variations {
            variation.validate()?;
        }
        Ok(())
    }

    /// Validate and build the multipart submission.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or
    /// `ApiError::Parse` if the payload cannot be serialized.
    #[instrument(skip(self), fields(name = %self.name, variations = self.variations.len()))]
    pub fn into_multipart(self) -> Result<Form, ApiError> {
        self.validate()?;

        let partitions: Vec<_> = self
            .variations
            .iter()
            .map(|v| partition_images(&v.images))
            .collect();

        let payload = ProductPayload {
            name: &self.name,
            description: &self.description,
            category: &self.category,
            tags: &self.tags,
            is_return_allowed: self.is_return_allowed,
            is_visible: self.is_visible,
            variations: self
                .variations
                .iter()
                .zip(&partitions)
                .map(|(variation, partition)| ProductVariationPayload {
                    fields: variation.payload(),
                    existing_images: partition.existing.clone(),
                })
                .collect(),
        };

        let payload = serde_json::to_string(&payload)
            .map_err(|e| ApiError::Parse(format!("Failed to serialize product: {e}")))?;
        let mut form = Form::new().text("payload", payload);

        for (index, partition) in partitions.into_iter().enumerate() {
            for upload in partition.uploads {
                form = form.part(format!("variationImages[{index}]"), file_part(upload)?);
            }
        }
        Ok(form)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::VariationAttributes;
    use mango_market_core::{ImageSource, ImageUpload};
    use rust_decimal::Decimal;

    fn variation(images: Vec<ImageSource>) -> VariationForm {
        VariationForm {
            attributes: VariationAttributes::Named(vec![]),
            price: Decimal::new(9900, 2),
            discount: Decimal::ZERO,
            quantity: 5,
            images,
        }
    }

    fn product() -> ProductForm {
        ProductForm {
            name: "Alphonso Mangoes".to_owned(),
            description: "Box of 12".to_owned(),
            category: CategoryId::new("cat1"),
            tags: vec!["fruit".to_owned()],
            is_return_allowed: false,
            is_visible: true,
            variations: vec![variation(vec![ImageSource::Url(
                "https://cdn.example.com/a.png".to_owned(),
            )])],
        }
    }

    #[test]
    fn test_validate_requires_name() {
        let mut form = product();
        form.name = String::new();
        assert_eq!(form.validate().unwrap_err().field, "name");
    }

    #[test]
    fn test_validate_requires_a_variation() {
        let mut form = product();
        form.variations.clear();
        assert_eq!(form.validate().unwrap_err().field, "variations");
    }

    #[test]
    fn test_validate_surfaces_first_variation_violation() {
        let mut form = product();
        form.variations = vec![
            variation(vec![]),
            VariationForm {
                price: Decimal::new(-100, 2),
                ..variation(vec![])
            },
        ];
        assert_eq!(form.validate().unwrap_err().field, "price");
    }

    #[test]
    fn test_into_multipart_with_mixed_images() {
        let mut form = product();
        form.variations = vec![variation(vec![
            ImageSource::Url("https://cdn.example.com/a.png".to_owned()),
            ImageSource::Upload(ImageUpload {
                file_name: "new.png".to_owned(),
                content_type: "image/png".to_owned(),
                bytes: vec![0_u8; 32],
            }),
        ])];
        assert!(form.into_multipart().is_ok());
    }
}
