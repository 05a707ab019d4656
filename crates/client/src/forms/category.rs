//! Category create/edit form.

use mango_market_core::{ImageSource, partition_images};
use reqwest::multipart::Form;
use serde::Serialize;

use crate::error::{ApiError, ValidationError};

use super::images::attach_images;
use super::validate::{check_uploads, require};

/// A category as edited in the console.
///
/// Categories carry a single image, but edits still go through the shared
/// mixed-list convention: the existing URL survives as-is unless replaced.
#[derive(Debug, Clone)]
pub struct CategoryForm {
    pub name: String,
    pub images: Vec<ImageSource>,
}

#[derive(Debug, Serialize)]
struct CategoryPayload<'a> {
    name: &'a str,
}

impl CategoryForm {
    /// Validate the form, first violation wins.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
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

        let payload = serde_json::to_string(&CategoryPayload { name: &self.name })
            .map_err(|e| ApiError::Parse(format!("Failed to serialize category: {e}")))?;
        let form = Form::new().text("payload", payload);
        attach_images(form, partition_images(&self.images))
    }
}
