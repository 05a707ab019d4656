//! Support-surface commands: FAQs, inquiries, tickets, contact messages,
//! and platform settings.

use clap::Subcommand;
use rust_decimal::Decimal;

use mango_market_client::types::StoreSettings;
use mango_market_core::{FaqId, InquiryId, TicketId};

use super::{CliError, Console};

#[derive(Subcommand)]
pub enum SupportAction {
    /// List FAQs
    Faqs,
    /// Create an FAQ
    FaqCreate {
        /// Question text
        #[arg(short, long)]
        question: String,

        /// Answer text
        #[arg(short, long)]
        answer: String,
    },
    /// Update an FAQ
    FaqUpdate {
        /// FAQ id
        faq_id: FaqId,

        /// Question text
        #[arg(short, long)]
        question: String,

        /// Answer text
        #[arg(short, long)]
        answer: String,
    },
    /// Delete an FAQ
    FaqDelete {
        /// FAQ id
        faq_id: FaqId,
    },
    /// List customer inquiries
    Inquiries,
    /// Mark an inquiry resolved
    InquiryResolve {
        /// Inquiry id
        inquiry_id: InquiryId,
    },
    /// List support tickets
    Tickets,
    /// Set a ticket's status
    TicketStatus {
        /// Ticket id
        ticket_id: TicketId,

        /// New status (backend-defined vocabulary, e.g. open/closed)
        status: String,
    },
    /// List received contact messages
    Contact,
    /// Show the platform settings
    Settings,
    /// Update platform settings (only the provided fields are sent)
    SettingsUpdate {
        /// Support email address
        #[arg(long)]
        support_email: Option<String>,

        /// Support phone number
        #[arg(long)]
        support_phone: Option<String>,

        /// Delivery fee
        #[arg(long)]
        delivery_fee: Option<Decimal>,

        /// Minimum order amount
        #[arg(long)]
        min_order_amount: Option<Decimal>,
    },
}

pub async fn run(console: &Console, action: SupportAction) -> Result<(), CliError> {
    match action {
        SupportAction::Faqs => {
            let faqs = console.client().faqs().await?;
            tracing::info!("{} FAQ(s)", faqs.len());
            for faq in faqs {
                tracing::info!(id = %faq.id, question = %faq.question, "faq");
            }
        }
        SupportAction::FaqCreate { question, answer } => {
            console.client().create_faq(&question, &answer).await?;
            tracing::info!("FAQ created");
        }
        SupportAction::FaqUpdate {
            faq_id,
            question,
            answer,
        } => {
            console.client().update_faq(&faq_id, &question, &answer).await?;
            tracing::info!(faq_id = %faq_id, "FAQ updated");
        }
        SupportAction::FaqDelete { faq_id } => {
            console.client().delete_faq(&faq_id).await?;
            tracing::info!(faq_id = %faq_id, "FAQ deleted");
        }
        SupportAction::Inquiries => {
            let inquiries = console.client().inquiries().await?;
            tracing::info!("{} inquirie(s)", inquiries.len());
            for inquiry in inquiries {
                tracing::info!(
                    id = %inquiry.id,
                    resolved = inquiry.resolved,
                    message = %inquiry.message,
                    "inquiry"
                );
            }
        }
        SupportAction::InquiryResolve { inquiry_id } => {
            console.client().set_inquiry_resolved(&inquiry_id, true).await?;
            tracing::info!(inquiry_id = %inquiry_id, "Inquiry resolved");
        }
        SupportAction::Tickets => {
            let tickets = console.client().tickets().await?;
            tracing::info!("{} ticket(s)", tickets.len());
            for ticket in tickets {
                tracing::info!(
                    id = %ticket.id,
                    subject = %ticket.subject,
                    status = %ticket.status,
                    "ticket"
                );
            }
        }
        SupportAction::TicketStatus { ticket_id, status } => {
            console.client().set_ticket_status(&ticket_id, &status).await?;
            tracing::info!(ticket_id = %ticket_id, status = %status, "Ticket updated");
        }
        SupportAction::Contact => {
            let messages = console.client().contact_messages().await?;
            tracing::info!("{} message(s)", messages.len());
            for message in messages {
                tracing::info!(
                    name = %message.name,
                    email = %message.email,
                    message = %message.message,
                    "contact"
                );
            }
        }
        SupportAction::Settings => {
            let settings = console.client().settings().await?;
            tracing::info!(
                store_name = settings.store_name.as_deref().unwrap_or("-"),
                support_email = settings.support_email.as_deref().unwrap_or("-"),
                support_phone = settings.support_phone.as_deref().unwrap_or("-"),
                "settings"
            );
        }
        SupportAction::SettingsUpdate {
            support_email,
            support_phone,
            delivery_fee,
            min_order_amount,
        } => {
            let update = StoreSettings {
                store_name: None,
                support_email,
                support_phone,
                delivery_fee,
                min_order_amount,
            };
            console.client().update_settings(&update).await?;
            tracing::info!("Settings updated");
        }
    }
    Ok(())
}
