//! Banner create/edit form.

use mango_market_core::{ImageSource, partition_images};
use reqwest::multipart::Form;
use serde::Serialize;

use crate::error::{ApiError, ValidationError};

use super::images::attach_images;
use super::validate::{check_uploads, require};

/// A storefront banner as edited in the console.
#[derive(Debug, Clone)]
pub struct BannerForm {
    pub title: String,
    pub link: Option<String>,
    pub is_active: bool,
    pub images: Vec<ImageSource>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BannerPayload<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
    is_active: bool,
}

impl BannerForm {
    /// Validate the form, first violation wins.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        if self.images.is_empty() {
            return Err(ValidationError::new("images", "a banner image is required"));
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

    /// Validate and build the multipart submission.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or
    /// `ApiError::Parse` if the payload cannot be serialized.
    pub fn into_multipart(self) -> Result<Form, ApiError> {
        self.validate()?;

        let payload = serde_json::to_string(&BannerPayload {
            title: &self.title,
            link: self.link.as_deref(),
            is_active: self.is_active,
        })
        .map_err(|e| ApiError::Parse(format!("Failed to serialize banner: {e}")))?;
        let form = Form::new().text("payload", payload);
        attach_images(form, partition_images(&self.images))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_an_image() {
        let form = BannerForm {
            title: "Summer Sale".to_owned(),
            link: None,
            is_active: true,
            images: vec![],
        };
        assert_eq!(form.validate().unwrap_err().field, "images");
    }
}
