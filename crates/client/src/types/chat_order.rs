//! Chat order types.
//!
//! A chat order is created from a conversational flow rather than the cart
//! checkout: free-text items, an editable product list, and a total the
//! console recomputes on every field edit.

use chrono::{DateTime, Utc};
use mango_market_core::{ChatOrderId, OrderStatus, PaymentStatus, line_total, order_total};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::OrderCustomer;

/// An order created through the conversational flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatOrder {
    #[serde(rename = "_id")]
    pub id: ChatOrderId,
    /// Free-text message the order was created from.
    #[serde(default)]
    pub order_message: String,
    #[serde(default)]
    pub customer: OrderCustomer,
    #[serde(default)]
    pub products: Vec<ChatOrderLine>,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl ChatOrder {
    /// Recompute `total_amount` from the product rows.
    ///
    /// Called after every row edit; the backend receives only recomputed
    /// totals.
    pub fn recompute_total(&mut self) {
        self.total_amount = order_total(self.products.iter().map(ChatOrderLine::total));
    }

    /// Replace one row field and recompute the total.
    ///
    /// Returns `false` (leaving the order unchanged) when `index` is out of
    /// range.
    pub fn edit_line(&mut self, index: usize, edit: LineEdit) -> bool {
        let Some(line) = self.products.get_mut(index) else {
            return false;
        };
        match edit {
            LineEdit::Price(price) => line.price = price,
            LineEdit::Quantity(quantity) => line.quantity = quantity,
            LineEdit::Discount(discount) => line.discount = discount,
        }
        self.recompute_total();
        true
    }
}

/// One edit to a chat-order product row.
#[derive(Debug, Clone, Copy)]
pub enum LineEdit {
    Price(Decimal),
    Quantity(u32),
    Discount(Decimal),
}

/// An editable product row on a chat order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatOrderLine {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    /// Discount percentage (0-100).
    #[serde(default)]
    pub discount: Decimal,
}

impl ChatOrderLine {
    /// The row total: `price * quantity * (1 - discount/100)`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        line_total(self.price, self.quantity, self.discount)
    }
}
