//! Console command implementations.
//!
//! Every command runs through a [`Console`] context: configuration from the
//! environment, one [`MarketClient`], and the file-backed session store. The
//! persisted session is restored into the client at boot, mirroring how the
//! session file is the durable copy and the in-memory state a cache of it.

pub mod auth;
pub mod catalog;
pub mod chat_orders;
pub mod drivers;
pub mod orders;
pub mod products;
pub mod support;
pub mod vendors;

use std::path::Path;

use thiserror::Error;

use mango_market_client::session::{FileSessionStore, Session, SessionStore, SessionStoreError};
use mango_market_client::{ApiError, ClientConfig, ConfigError, MarketClient};
use mango_market_core::{ImageSource, ImageUpload, VendorId};

/// Errors surfaced to the operator. Every failure maps to a logged message
/// and a non-zero exit code; nothing is fatal to the process beyond that.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The backend call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The session file could not be read or written.
    #[error("Session error: {0}")]
    Session(#[from] SessionStoreError),

    /// An authenticated command ran without a session.
    #[error("Not logged in - run 'mm-cli auth login' first")]
    NotLoggedIn,

    /// A file argument could not be read.
    #[error("Failed to read {0}: {1}")]
    ReadFile(String, std::io::Error),
}

/// Shared context for all commands.
pub struct Console {
    client: MarketClient,
    store: FileSessionStore,
}

impl Console {
    /// Load configuration, build the client, and restore the persisted
    /// session into it.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the session file is
    /// unreadable (corrupt content is not an error; it degrades to logged
    /// out).
    pub async fn bootstrap() -> Result<Self, CliError> {
        let config = ClientConfig::from_env()?;
        let client = MarketClient::new(&config)?;
        let store = FileSessionStore::new(config.session_file.clone());

        if let Some(session) = store.load()?
            && session.is_authenticated
        {
            client.set_token(session.token).await;
        }

        Ok(Self { client, store })
    }

    /// The configured API client.
    #[must_use]
    pub fn client(&self) -> &MarketClient {
        &self.client
    }

    /// The session store.
    #[must_use]
    pub fn store(&self) -> &FileSessionStore {
        &self.store
    }

    /// The current authenticated session.
    ///
    /// # Errors
    ///
    /// Returns `CliError::NotLoggedIn` when no authenticated session is
    /// persisted.
    pub fn session(&self) -> Result<Session, CliError> {
        self.store
            .load()?
            .filter(|session| session.is_authenticated)
            .ok_or(CliError::NotLoggedIn)
    }

    /// The logged-in account's vendor id (used for vendor-scoped listings).
    ///
    /// # Errors
    ///
    /// Returns `CliError::NotLoggedIn` when no authenticated session is
    /// persisted.
    pub fn vendor_id(&self) -> Result<VendorId, CliError> {
        Ok(self.session()?.user.id)
    }
}

/// Read a file argument into an upload, inferring the MIME type from the
/// extension.
pub(crate) fn read_upload(path: &str) -> Result<ImageUpload, CliError> {
    let bytes =
        std::fs::read(path).map_err(|e| CliError::ReadFile(path.to_owned(), e))?;
    let file_name = Path::new(path)
        .file_name()
        .map_or_else(|| path.to_owned(), |name| name.to_string_lossy().into_owned());

    let content_type = match Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    };

    Ok(ImageUpload {
        file_name,
        content_type: content_type.to_owned(),
        bytes,
    })
}

/// Build a mixed image list from `--image-url` and `--image-file` arguments.
pub(crate) fn image_sources(
    urls: Vec<String>,
    files: Vec<String>,
) -> Result<Vec<ImageSource>, CliError> {
    let mut images: Vec<ImageSource> = urls.into_iter().map(ImageSource::Url).collect();
    for file in files {
        images.push(ImageSource::Upload(read_upload(&file)?));
    }
    Ok(images)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_upload_infers_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.PNG");
        std::fs::write(&path, b"not-a-real-png").unwrap();

        let upload = read_upload(path.to_str().unwrap()).unwrap();
        assert_eq!(upload.content_type, "image/png");
        assert_eq!(upload.file_name, "photo.PNG");
    }

    #[test]
    fn test_read_upload_missing_file() {
        let err = read_upload("/nonexistent/file.jpg").unwrap_err();
        assert!(matches!(err, CliError::ReadFile(_, _)));
    }

    #[test]
    fn test_image_sources_keeps_urls_first() {
        let images = image_sources(vec!["https://cdn.example.com/a.png".to_owned()], vec![])
            .unwrap();
        assert_eq!(images.len(), 1);
        assert!(matches!(images.first(), Some(ImageSource::Url(_))));
    }
}
