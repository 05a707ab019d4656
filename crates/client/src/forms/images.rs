//! Shared multipart attachment of partitioned image lists.
//!
//! Every image-bearing editor serializes its images the same way, so the
//! backend parses one convention instead of one per screen.

use mango_market_core::{ImagePartition, ImageUpload};
use reqwest::multipart::{Form, Part};

use crate::error::ApiError;

/// Multipart part name for the kept stored-image URLs (JSON array).
pub(crate) const EXISTING_IMAGES_PART: &str = "existingImages";

/// Multipart part name for new file uploads.
pub(crate) const IMAGES_PART: &str = "images";

/// Attach a partitioned image list to a multipart form.
///
/// Kept URLs become one `existingImages` JSON-array part (unchanged, in
/// order); each new file becomes an `images` file part with its original
/// filename and content type.
pub(crate) fn attach_images(form: Form, partition: ImagePartition) -> Result<Form, ApiError> {
    let existing = serde_json::to_string(&partition.existing)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize image list: {e}")))?;
    let mut form = form.text(EXISTING_IMAGES_PART, existing);

    for upload in partition.uploads {
        form = form.part(IMAGES_PART, file_part(upload)?);
    }
    Ok(form)
}

/// Build a file part from an upload.
pub(crate) fn file_part(upload: ImageUpload) -> Result<Part, ApiError> {
    Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)
        .map_err(ApiError::Http)
}
