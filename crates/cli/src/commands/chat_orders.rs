//! Chat-order commands.
//!
//! Row edits go through `ChatOrder::edit_line`, which recomputes the total
//! after every change; the backend only ever receives recomputed totals.

use clap::Subcommand;
use rust_decimal::Decimal;

use mango_market_core::{ChatOrderId, OrderStatus, PaymentStatus};
use mango_market_client::types::LineEdit;

use super::{CliError, Console};

#[derive(Subcommand)]
pub enum ChatOrderAction {
    /// List the vendor's chat orders
    List,
    /// Show one chat order with its rows
    Show {
        /// Chat order id
        order_id: ChatOrderId,
    },
    /// Set the chat order workflow status
    SetStatus {
        /// Chat order id
        order_id: ChatOrderId,

        /// One of: in-review, pending, processing, shipped, delivered,
        /// cancelled
        status: OrderStatus,

        /// Also submit the recomputed total with the status
        #[arg(long)]
        with_amount: bool,
    },
    /// Manually mark the payment status (paid/unpaid)
    VerifyPayment {
        /// Chat order id
        order_id: ChatOrderId,

        /// One of: paid, unpaid
        status: PaymentStatus,
    },
    /// Edit one product row and submit the recomputed order
    EditLine {
        /// Chat order id
        order_id: ChatOrderId,

        /// Zero-based row index
        #[arg(short, long)]
        index: usize,

        /// New unit price
        #[arg(long)]
        price: Option<Decimal>,

        /// New quantity
        #[arg(long)]
        quantity: Option<u32>,

        /// New discount percentage (0-100)
        #[arg(long)]
        discount: Option<Decimal>,
    },
}

pub async fn run(console: &Console, action: ChatOrderAction) -> Result<(), CliError> {
    match action {
        ChatOrderAction::List => {
            let vendor_id = console.vendor_id()?;
            let orders = console.client().vendor_chat_orders(&vendor_id).await?;
            tracing::info!("{} chat order(s)", orders.len());
            for order in orders {
                tracing::info!(
                    id = %order.id,
                    status = %order.order_status,
                    payment = %order.payment_status,
                    total = %order.total_amount,
                    "chat order"
                );
            }
        }
        ChatOrderAction::Show { order_id } => {
            let order = console.client().chat_order(&order_id).await?;
            tracing::info!(
                id = %order.id,
                message = %order.order_message,
                status = %order.order_status,
                total = %order.total_amount,
                "chat order"
            );
            for (index, line) in order.products.iter().enumerate() {
                tracing::info!(
                    index,
                    name = %line.name,
                    price = %line.price,
                    quantity = line.quantity,
                    discount = %line.discount,
                    total = %line.total(),
                    "row"
                );
            }
        }
        ChatOrderAction::SetStatus {
            order_id,
            status,
            with_amount,
        } => {
            if with_amount {
                let mut order = console.client().chat_order(&order_id).await?;
                order.recompute_total();
                console
                    .client()
                    .update_chat_order_status_amount(&order_id, status, order.total_amount)
                    .await?;
            } else {
                console
                    .client()
                    .update_chat_order_status(&order_id, status)
                    .await?;
            }
            tracing::info!(order_id = %order_id, status = %status, "Chat order status updated");
        }
        ChatOrderAction::VerifyPayment { order_id, status } => {
            console
                .client()
                .verify_chat_payment(&order_id, status)
                .await?;
            tracing::info!(order_id = %order_id, status = %status, "Payment status updated");
        }
        ChatOrderAction::EditLine {
            order_id,
            index,
            price,
            quantity,
            discount,
        } => {
            let mut order = console.client().chat_order(&order_id).await?;

            let mut edited = false;
            if let Some(price) = price {
                edited |= order.edit_line(index, LineEdit::Price(price));
            }
            if let Some(quantity) = quantity {
                edited |= order.edit_line(index, LineEdit::Quantity(quantity));
            }
            if let Some(discount) = discount {
                edited |= order.edit_line(index, LineEdit::Discount(discount));
            }

            if !edited {
                tracing::warn!(order_id = %order_id, index, "No row edited; nothing submitted");
                return Ok(());
            }

            console.client().update_chat_order(&order).await?;
            tracing::info!(
                order_id = %order_id,
                total = %order.total_amount,
                "Chat order updated"
            );
        }
    }
    Ok(())
}
