//! Sequential field validation helpers.
//!
//! Validation runs rule-by-rule and returns on the first violation; callers
//! see a single [`ValidationError`] naming the offending field.

use mango_market_core::ImageUpload;

use crate::error::ValidationError;

/// Require a non-empty (post-trim) text field.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

/// Require a plausibly shaped email address.
pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require(field, value)?;
    if !value.contains('@') || !value.contains('.') {
        return Err(ValidationError::new(field, "is not a valid email address"));
    }
    Ok(())
}

/// Require an upload to be within the per-file size ceiling.
pub fn check_upload(field: &'static str, upload: &ImageUpload) -> Result<(), ValidationError> {
    if upload.is_oversized() {
        return Err(ValidationError::new(
            field,
            format!("file '{}' exceeds the 5MB limit", upload.file_name),
        ));
    }
    Ok(())
}

/// Require every upload in a list to be within the size ceiling.
pub fn check_uploads<'a, I>(field: &'static str, uploads: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a ImageUpload>,
{
    for upload in uploads {
        check_upload(field, upload)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mango_market_core::MAX_UPLOAD_BYTES;

    #[test]
    fn test_require_rejects_whitespace() {
        assert!(require("name", "   ").is_err());
        assert!(require("name", "Asha").is_ok());
    }

    #[test]
    fn test_require_email_shape() {
        assert!(require_email("email", "asha@example.com").is_ok());
        assert!(require_email("email", "not-an-email").is_err());
        assert!(require_email("email", "").is_err());
    }

    #[test]
    fn test_check_upload_size_ceiling() {
        let upload = ImageUpload {
            file_name: "doc.jpg".to_owned(),
            content_type: "image/jpeg".to_owned(),
            bytes: vec![0_u8; MAX_UPLOAD_BYTES + 1],
        };
        let err = check_upload("documents", &upload).expect_err("oversized file must fail");
        assert_eq!(err.field, "documents");
        assert!(err.message.contains("doc.jpg"));
    }
}
