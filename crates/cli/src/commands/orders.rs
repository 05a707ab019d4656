//! Order commands: listing, the status workflow, payments, settlements.

use clap::Subcommand;

use mango_market_core::{OrderId, OrderStatus, PaymentStatus, SettlementKind, SettlementStatus};

use super::{CliError, Console};

#[derive(Subcommand)]
pub enum OrderAction {
    /// List the vendor's orders
    List,
    /// List the vendor's recent orders
    Recent,
    /// Show one order in full
    Show {
        /// Order id
        order_id: OrderId,
    },
    /// Set the order workflow status
    ///
    /// Any status can be submitted from any current status; the backend
    /// accepts or rejects the move.
    SetStatus {
        /// Order id
        order_id: OrderId,

        /// One of: in-review, pending, processing, shipped, delivered,
        /// cancelled
        status: OrderStatus,
    },
    /// Manually mark the payment status (paid/unpaid)
    VerifyPayment {
        /// Order id
        order_id: OrderId,

        /// One of: paid, unpaid
        status: PaymentStatus,
    },
    /// Update one settlement lane (admin only)
    Settle {
        /// Order id
        order_id: OrderId,

        /// One of: vendor-payment, driver-earning, floating-cash
        #[arg(short, long)]
        kind: SettlementKind,

        /// One of: pending, paid
        #[arg(short, long)]
        status: SettlementStatus,
    },
}

pub async fn run(console: &Console, action: OrderAction) -> Result<(), CliError> {
    match action {
        OrderAction::List => {
            let vendor_id = console.vendor_id()?;
            let orders = console.client().vendor_orders(&vendor_id).await?;
            tracing::info!("{} order(s)", orders.len());
            for order in orders {
                tracing::info!(
                    id = %order.id,
                    short_id = order.short_id.as_deref().unwrap_or("-"),
                    status = %order.order_status,
                    payment = %order.payment_status,
                    total = %order.total_amount,
                    "order"
                );
            }
        }
        OrderAction::Recent => {
            let vendor_id = console.vendor_id()?;
            let orders = console.client().recent_orders(&vendor_id).await?;
            for order in orders {
                tracing::info!(
                    id = %order.id,
                    status = %order.order_status,
                    created_at = %order.created_at,
                    "recent order"
                );
            }
        }
        OrderAction::Show { order_id } => {
            let vendor_id = console.vendor_id()?;
            let order = console.client().order(&order_id, &vendor_id).await?;
            tracing::info!(
                id = %order.id,
                customer = %order.customer.name,
                status = %order.order_status,
                payment = %order.payment_status,
                vendor_payment = %order.vendor_payment_status,
                driver_earning = %order.driver_earning_status,
                floating_cash = %order.floating_cash_status,
                total = %order.total_amount,
                "order"
            );
            for group in &order.vendors {
                for line in &group.products {
                    tracing::info!(
                        vendor = %group.vendor.name,
                        product = %line.name,
                        price = %line.price,
                        quantity = line.quantity,
                        "line"
                    );
                }
            }
        }
        OrderAction::SetStatus { order_id, status } => {
            let vendor_id = console.vendor_id()?;
            console
                .client()
                .update_order_status(&order_id, &vendor_id, status)
                .await?;
            tracing::info!(order_id = %order_id, status = %status, "Order status updated");
        }
        OrderAction::VerifyPayment { order_id, status } => {
            console
                .client()
                .verify_payment_manually(&order_id, status)
                .await?;
            tracing::info!(order_id = %order_id, status = %status, "Payment status updated");
        }
        OrderAction::Settle {
            order_id,
            kind,
            status,
        } => {
            console
                .client()
                .update_settlement_status(&order_id, kind, status)
                .await?;
            tracing::info!(
                order_id = %order_id,
                kind = %kind,
                status = %status,
                "Settlement lane updated"
            );
        }
    }
    Ok(())
}
