//! The configured HTTP client shared by every API module.
//!
//! One `reqwest::Client` with the backend base URL and the session bearer
//! token. All responses funnel through a single handler so every module
//! surfaces the same [`ApiError`] taxonomy: 2xx deserialized, 401/403 to
//! `Unauthorized`, 404 to `NotFound`, 429 to `RateLimited`, anything else to
//! `Backend` with the message parsed from the `{ "message": ... }` body.
//!
//! There are no retries, no request cancellation, and no per-request timeout
//! overrides; each call is an independent future and callers track progress
//! per invocation.

use std::sync::Arc;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// REST client for the marketplace backend.
///
/// Cheap to clone; all clones share the same connection pool and session
/// token.
#[derive(Clone)]
pub struct MarketClient {
    inner: Arc<MarketClientInner>,
}

struct MarketClientInner {
    http: reqwest::Client,
    base_url: Url,
    /// In-memory session token (persisted externally by the session store).
    token: RwLock<Option<SecretString>>,
}

/// Backend error body shape. Modules differ in whether they populate
/// `message` or `error`; both are accepted.
#[derive(Debug, serde::Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl MarketClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(MarketClientInner {
                http,
                base_url: config.base_url.clone(),
                token: RwLock::new(None),
            }),
        })
    }

    /// Get the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Set the session token (called after login or session restore).
    pub async fn set_token(&self, token: SecretString) {
        *self.inner.token.write().await = Some(token);
    }

    /// Clear the session token (called on logout).
    pub async fn clear_token(&self) {
        *self.inner.token.write().await = None;
    }

    /// Whether a session token is currently set.
    pub async fn has_token(&self) -> bool {
        self.inner.token.read().await.is_some()
    }

    /// Build the absolute URL for a backend path.
    fn endpoint(&self, path: &str) -> String {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        format!("{base}{path}")
    }

    /// Read the current token, erroring when none is set.
    async fn require_token(&self) -> Result<String, ApiError> {
        let token = self.inner.token.read().await;
        token
            .as_ref()
            .map(|t| t.expose_secret().to_owned())
            .ok_or(ApiError::NoSessionToken)
    }

    // =========================================================================
    // Authenticated requests
    // =========================================================================

    /// Execute an authenticated GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let token = self.require_token().await?;
        let response = self
            .inner
            .http
            .get(self.endpoint(path))
            .bearer_auth(token)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Execute an authenticated request with a JSON body.
    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let token = self.require_token().await?;
        let response = self
            .inner
            .http
            .request(method, self.endpoint(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Execute an authenticated request with an empty body.
    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, ApiError> {
        let token = self.require_token().await?;
        let response = self
            .inner
            .http
            .request(method, self.endpoint(path))
            .bearer_auth(token)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Execute an authenticated multipart request.
    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let token = self.require_token().await?;
        let response = self
            .inner
            .http
            .request(method, self.endpoint(path))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Public (pre-login) requests
    // =========================================================================

    /// Execute an unauthenticated POST with a JSON body (login,
    /// forgot/reset password).
    pub(crate) async fn post_public<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let response = self
            .inner
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Execute an unauthenticated multipart POST (signup).
    pub(crate) async fn post_multipart_public<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let response = self
            .inner
            .http
            .post(self.endpoint(path))
            .multipart(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Response handling
    // =========================================================================

    /// Handle a backend response and parse the JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Map an error response to the unified taxonomy.
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let path = response.url().path().to_owned();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return ApiError::RateLimited(retry_after);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<BackendErrorBody>(&body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body
                }
            });

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return ApiError::Unauthorized(message);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return ApiError::NotFound(path);
        }

        ApiError::Backend {
            status: status.as_u16(),
            message,
        }
    }
}

impl std::fmt::Debug for MarketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn client() -> MarketClient {
        let config = ClientConfig::new(
            "https://api.example.com".parse().unwrap(),
            Duration::from_secs(5),
            PathBuf::from("/tmp/session.json"),
        );
        MarketClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = client();
        assert_eq!(
            client.endpoint("/vendors/login"),
            "https://api.example.com/vendors/login"
        );
    }

    #[tokio::test]
    async fn test_token_lifecycle() {
        let client = client();
        assert!(!client.has_token().await);

        client.set_token(SecretString::from("tok-123")).await;
        assert!(client.has_token().await);

        client.clear_token().await;
        assert!(!client.has_token().await);
    }

    #[tokio::test]
    async fn test_authenticated_call_without_token_fails_fast() {
        let client = client();
        let result: Result<serde_json::Value, ApiError> = client.get("/orders").await;
        assert!(matches!(result, Err(ApiError::NoSessionToken)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = client();
        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("api.example.com"));
        assert!(!debug_output.contains("token"));
    }
}
