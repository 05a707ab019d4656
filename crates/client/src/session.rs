//! Persisted operator session.
//!
//! The session file on disk is the durable copy; the in-memory session held
//! by the console is a read cache reconstructed from it at boot. Every
//! mutation that touches the token or user writes the file synchronously in
//! the same call. Only the running console process writes the file, so no
//! locking is needed.
//!
//! Reads go through a typed schema with a defined fallback: a malformed or
//! unreadable file logs a warning and behaves as logged-out instead of
//! failing the boot.

use std::io::Write;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::User;

/// Errors that can occur when persisting the session.
///
/// Load-side corruption is not an error: it degrades to `None` with a
/// warning.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Filesystem operation failed.
    #[error("session file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session could not be serialized.
    #[error("session serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The logged-in operator session.
pub struct Session {
    /// Bearer token for authenticated calls.
    pub token: SecretString,
    /// The account returned by the login endpoint.
    pub user: User,
    /// Mirrors the token's presence; kept explicit because logout writes
    /// `false` rather than deleting the flag.
    pub is_authenticated: bool,
}

impl Session {
    /// Build an authenticated session from a login response.
    #[must_use]
    pub fn authenticated(token: SecretString, user: User) -> Self {
        Self {
            token,
            user,
            is_authenticated: true,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user", &self.user.email)
            .field("is_authenticated", &self.is_authenticated)
            .finish()
    }
}

/// On-disk session schema.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    token: String,
    user: User,
    is_authenticated: bool,
}

/// Persistence backend for the operator session.
pub trait SessionStore {
    /// Load the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures other than a missing file;
    /// corrupt content yields `Ok(None)`.
    fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    /// Persist the session, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be serialized or written.
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Delete the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// File-backed session store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store persisting to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The session file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<PersistedSession>(&contents) {
            Ok(persisted) => Ok(Some(Session {
                token: SecretString::from(persisted.token),
                user: persisted.user,
                is_authenticated: persisted.is_authenticated,
            })),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Session file is corrupt; treating as logged out"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let persisted = PersistedSession {
            token: session.token.expose_secret().to_owned(),
            user: session.user.clone(),
            is_authenticated: session.is_authenticated,
        };
        let contents = serde_json::to_vec_pretty(&persisted)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash mid-write never leaves a truncated
        // session file.
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut tmp = std::fs::File::create(&tmp_path)?;
            tmp.write_all(&contents)?;
            tmp.sync_all()?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session store for tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: std::sync::Mutex<Option<String>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let guard = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let Some(contents) = guard.as_ref() else {
            return Ok(None);
        };
        let persisted: PersistedSession = serde_json::from_str(contents)?;
        Ok(Some(Session {
            token: SecretString::from(persisted.token),
            user: persisted.user,
            is_authenticated: persisted.is_authenticated,
        }))
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let persisted = PersistedSession {
            token: session.token.expose_secret().to_owned(),
            user: session.user.clone(),
            is_authenticated: session.is_authenticated,
        };
        let contents = serde_json::to_string(&persisted)?;
        *self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(contents);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}
