//! Chat-order endpoints.
//!
//! Chat orders share the order status machine but keep their own endpoints
//! and an editable product list whose totals are recomputed client-side
//! before every submit (see [`crate::types::ChatOrder::recompute_total`]).

use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use mango_market_core::{ChatOrderId, OrderStatus, PaymentStatus, VendorId};

use crate::error::ApiError;
use crate::http::MarketClient;
use crate::types::{ChatOrder, ChatOrderLine};

use super::Ack;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusAmountRequest<'a> {
    order_id: &'a ChatOrderId,
    new_status: OrderStatus,
    total_amount: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewStatusRequest {
    new_status: OrderStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatVerifyPaymentRequest<'a> {
    order_id: &'a ChatOrderId,
    new_status: PaymentStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateChatOrderRequest<'a> {
    order_id: &'a ChatOrderId,
    products: &'a [ChatOrderLine],
    total_amount: Decimal,
}

impl MarketClient {
    /// List a vendor's chat orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(vendor_id = %vendor_id))]
    pub async fn vendor_chat_orders(
        &self,
        vendor_id: &VendorId,
    ) -> Result<Vec<ChatOrder>, ApiError> {
        self.get(&format!("/chat-order/vendor/{vendor_id}")).await
    }

    /// Fetch one chat order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the chat order does not exist.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn chat_order(&self, order_id: &ChatOrderId) -> Result<ChatOrder, ApiError> {
        self.get(&format!("/chat-order/{order_id}")).await
    }

    /// Set a chat order's status together with its recomputed total.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self), fields(order_id = %order_id, new_status = %new_status))]
    pub async fn update_chat_order_status_amount(
        &self,
        order_id: &ChatOrderId,
        new_status: OrderStatus,
        total_amount: Decimal,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::PUT,
            "/chat-order-status-amount",
            &StatusAmountRequest {
                order_id,
                new_status,
                total_amount,
            },
        )
        .await
    }

    /// Set a chat order's workflow status.
    ///
    /// Same contract as regular orders: exactly one PUT, no client-side
    /// transition guard.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self), fields(order_id = %order_id, new_status = %new_status))]
    pub async fn update_chat_order_status(
        &self,
        order_id: &ChatOrderId,
        new_status: OrderStatus,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/chat-order/status/{order_id}/vendor/"),
            &NewStatusRequest { new_status },
        )
        .await
    }

    /// Manually mark a chat order's payment status.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self), fields(order_id = %order_id, new_status = %new_status))]
    pub async fn verify_chat_payment(
        &self,
        order_id: &ChatOrderId,
        new_status: PaymentStatus,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::POST,
            "/chat-verify-payment",
            &ChatVerifyPaymentRequest {
                order_id,
                new_status,
            },
        )
        .await
    }

    /// Submit an edited chat order (product rows plus recomputed total).
    ///
    /// The total is recomputed from the rows here as well, so a stale
    /// `total_amount` on the passed order can never reach the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn update_chat_order(&self, order: &ChatOrder) -> Result<Ack, ApiError> {
        let total_amount =
            mango_market_core::order_total(order.products.iter().map(ChatOrderLine::total));
        self.send_json(
            Method::PUT,
            "/chat/updateChatOrder",
            &UpdateChatOrderRequest {
                order_id: &order.id,
                products: &order.products,
                total_amount,
            },
        )
        .await
    }
}
