//! Mango Market Client - REST client for the marketplace backend.
//!
//! Everything the console does runs through this crate: one configured HTTP
//! client with bearer-token injection, one function group per backend
//! resource, multipart form builders for the image-bearing editors, and the
//! persisted operator session.
//!
//! # Architecture
//!
//! - [`MarketClient`] wraps a single `reqwest::Client` with the configured
//!   base URL and the in-memory session token. All request/response handling
//!   funnels through one response handler, so every module surfaces the same
//!   [`ApiError`] shape.
//! - [`api`] adds one `impl MarketClient` block per backend resource. Each
//!   function issues exactly one HTTP request.
//! - [`forms`] builds the multipart payloads for variation, category, banner,
//!   and onboarding submissions, validating client-side before any network
//!   call.
//! - [`session`] persists the operator session (token, user, authenticated
//!   flag) to disk and restores it at boot.
//!
//! # Example
//!
//! ```rust,ignore
//! use mango_market_client::{ClientConfig, MarketClient};
//!
//! let config = ClientConfig::from_env()?;
//! let client = MarketClient::new(&config)?;
//!
//! let login = client.login("vendor@example.com", "hunter2...").await?;
//! client.set_token(login.token.into()).await;
//!
//! let orders = client.vendor_orders(&login.user.id).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
mod http;
pub mod session;
pub mod types;

pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ValidationError};
pub use http::MarketClient;
