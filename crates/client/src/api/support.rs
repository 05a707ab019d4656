//! Support-surface endpoints: FAQs, contact messages, inquiries, tickets.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use mango_market_core::{FaqId, InquiryId, TicketId};

use crate::error::ApiError;
use crate::http::MarketClient;
use crate::types::{ContactMessage, Faq, Inquiry, Ticket};

use super::Ack;

#[derive(Debug, Serialize)]
struct FaqRequest<'a> {
    question: &'a str,
    answer: &'a str,
}

#[derive(Debug, Serialize)]
struct ResolveRequest {
    resolved: bool,
}

#[derive(Debug, Serialize)]
struct TicketStatusRequest<'a> {
    status: &'a str,
}

impl MarketClient {
    // =========================================================================
    // FAQs
    // =========================================================================

    /// List all FAQs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn faqs(&self) -> Result<Vec<Faq>, ApiError> {
        self.get("/faqs").await
    }

    /// Create an FAQ.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, question, answer))]
    pub async fn create_faq(&self, question: &str, answer: &str) -> Result<Ack, ApiError> {
        self.send_json(Method::POST, "/faqs", &FaqRequest { question, answer })
            .await
    }

    /// Update an FAQ.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, question, answer), fields(faq_id = %id))]
    pub async fn update_faq(
        &self,
        id: &FaqId,
        question: &str,
        answer: &str,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/faqs/{id}"),
            &FaqRequest { question, answer },
        )
        .await
    }

    /// Delete an FAQ.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(faq_id = %id))]
    pub async fn delete_faq(&self, id: &FaqId) -> Result<Ack, ApiError> {
        self.send_empty(Method::DELETE, &format!("/faqs/{id}")).await
    }

    // =========================================================================
    // Contact messages
    // =========================================================================

    /// Submit a contact message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, message))]
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<Ack, ApiError> {
        self.send_json(Method::POST, "/contact", message).await
    }

    /// List received contact messages (admin view).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn contact_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        self.get("/get-contact").await
    }

    // =========================================================================
    // Inquiries
    // =========================================================================

    /// List customer inquiries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn inquiries(&self) -> Result<Vec<Inquiry>, ApiError> {
        self.get("/inquiries").await
    }

    /// Mark an inquiry resolved or unresolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(inquiry_id = %id, resolved))]
    pub async fn set_inquiry_resolved(
        &self,
        id: &InquiryId,
        resolved: bool,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/inquiries/{id}"),
            &ResolveRequest { resolved },
        )
        .await
    }

    // =========================================================================
    // Tickets
    // =========================================================================

    /// List support tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.get("/tickets").await
    }

    /// Set a ticket's status. The backend owns the status vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(ticket_id = %id, status))]
    pub async fn set_ticket_status(&self, id: &TicketId, status: &str) -> Result<Ack, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/tickets/{id}"),
            &TicketStatusRequest { status },
        )
        .await
    }
}
