//! Authentication endpoints.
//!
//! Login and signup return a token plus the account; the caller (the
//! console) decides whether to adopt them as the active session.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::forms::VendorSignupForm;
use crate::http::MarketClient;
use crate::types::User;

use super::Ack;

/// Successful login/signup payload.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent calls.
    pub token: String,
    /// The authenticated account.
    pub user: User,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct ResetPasswordRequest<'a> {
    password: &'a str,
}

impl MarketClient {
    /// Log in with email and password.
    ///
    /// Does not mutate the client's token; call
    /// [`set_token`](Self::set_token) with the returned token to
    /// authenticate subsequent calls.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for rejected credentials, or any
    /// other variant for transport/backend failures.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_public("/vendors/login", &LoginRequest { email, password })
            .await
    }

    /// Register a new vendor account (multipart: text sections, documents,
    /// selfie).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the form fails client-side checks;
    /// no network call is made in that case.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn signup(&self, form: VendorSignupForm) -> Result<LoginResponse, ApiError> {
        let form = form.into_multipart()?;
        self.post_multipart_public("/vendors/signup", form).await
    }

    /// Request a password-reset email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn forgot_password(&self, email: &str) -> Result<Ack, ApiError> {
        self.post_public(
            "/vendors/auth/forgot-password",
            &ForgotPasswordRequest { email },
        )
        .await
    }

    /// Complete a password reset with the emailed token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the request fails.
    #[instrument(skip(self, password, reset_token))]
    pub async fn reset_password(&self, reset_token: &str, password: &str) -> Result<Ack, ApiError> {
        self.post_public(
            &format!("/vendors/auth/reset-password/{reset_token}"),
            &ResetPasswordRequest { password },
        )
        .await
    }
}
