//! Support-surface types: FAQs, contact messages, inquiries, tickets.

use chrono::{DateTime, Utc};
use mango_market_core::{FaqId, InquiryId, TicketId};
use serde::{Deserialize, Serialize};

/// A frequently asked question shown on the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(rename = "_id")]
    pub id: FaqId,
    pub question: String,
    pub answer: String,
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A customer inquiry routed to the admin console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(rename = "_id")]
    pub id: InquiryId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub message: String,
    #[serde(default)]
    pub resolved: bool,
}

/// A support ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: TicketId,
    pub subject: String,
    #[serde(default)]
    pub message: String,
    /// Free-form status string ("open", "closed", ...); the backend owns the
    /// vocabulary.
    #[serde(default)]
    pub status: String,
}
