//! Image lists for edit forms that mix stored and newly selected images.
//!
//! Edit screens load a mixed list: images already stored on the backend are
//! plain URLs, images the operator just added are in-memory files. Both kinds
//! travel together through add/remove edits; at submit time the list is
//! partitioned once into the two halves of the multipart payload. Removing an
//! entry before submit is a plain in-memory filter with no network side
//! effect.

/// Maximum size of a single uploaded file (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// A new file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name, sent as the multipart part filename.
    pub file_name: String,
    /// MIME type (e.g., `image/jpeg`).
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Whether this file exceeds the per-file upload ceiling.
    #[must_use]
    pub fn is_oversized(&self) -> bool {
        self.bytes.len() > MAX_UPLOAD_BYTES
    }
}

/// One entry in an edit form's image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An image already stored on the backend; its URL is passed through
    /// unchanged on submit.
    Url(String),
    /// A newly selected file, uploaded with the submission.
    Upload(ImageUpload),
}

/// Result of partitioning a mixed image list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePartition {
    /// Surviving already-stored image URLs, in list order.
    pub existing: Vec<String>,
    /// Newly selected files, in list order.
    pub uploads: Vec<ImageUpload>,
}

/// Partition a mixed image list into kept URLs and new uploads.
///
/// Every entry lands in exactly one of the two lists; relative order is
/// preserved within each list. The result contains exactly the union of the
/// input - nothing dropped, nothing duplicated - regardless of how the list
/// was edited before submit.
#[must_use]
pub fn partition_images(images: &[ImageSource]) -> ImagePartition {
    let mut partition = ImagePartition::default();
    for image in images {
        match image {
            ImageSource::Url(url) => partition.existing.push(url.clone()),
            ImageSource::Upload(upload) => partition.uploads.push(upload.clone()),
        }
    }
    partition
}
