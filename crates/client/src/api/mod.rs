//! API modules, one function group per backend resource.
//!
//! Every function reads the session token held by the client, issues exactly
//! one HTTP request per the backend contract, and returns the same
//! [`crate::ApiError`] shape on failure. No retries, no request
//! cancellation.

pub mod auth;
pub mod banners;
pub mod categories;
pub mod chat_orders;
pub mod customers;
pub mod drivers;
pub mod orders;
pub mod products;
pub mod settings;
pub mod support;
pub mod vendors;

pub use auth::LoginResponse;
pub use categories::CategoryScope;
pub use vendors::VendorUpdate;

use serde::Deserialize;

/// Generic acknowledgement for mutations.
///
/// Backend mutation bodies vary (some return the updated entity, some a bare
/// `{ message }`); unknown fields are ignored and `message` is surfaced when
/// present.
#[derive(Debug, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_accepts_message_body() {
        let ack: Ack = serde_json::from_str(r#"{"message":"updated"}"#).unwrap();
        assert_eq!(ack.message.as_deref(), Some("updated"));
    }

    #[test]
    fn test_ack_accepts_entity_body() {
        let ack: Ack = serde_json::from_str(r#"{"_id":"o1","orderStatus":"Shipped"}"#).unwrap();
        assert!(ack.message.is_none());
    }
}
