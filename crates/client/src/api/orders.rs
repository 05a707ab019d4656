//! Order endpoints.
//!
//! Status and payment updates submit whatever the operator selected - there
//! is no client-side transition guard, and the backend accepts or rejects
//! the write. Each settlement update targets exactly one lane via the `type`
//! discriminator.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use mango_market_core::{
    OrderId, OrderStatus, PaymentStatus, SettlementKind, SettlementStatus, VendorId,
};

use crate::error::ApiError;
use crate::http::MarketClient;
use crate::types::Order;

use super::Ack;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewStatusRequest {
    new_status: OrderStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyPaymentRequest<'a> {
    order_id: &'a OrderId,
    new_status: PaymentStatus,
}

#[derive(Debug, Serialize)]
struct SettlementRequest {
    #[serde(rename = "type")]
    kind: SettlementKind,
    status: SettlementStatus,
}

impl MarketClient {
    /// List all orders for a vendor.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(vendor_id = %vendor_id))]
    pub async fn vendor_orders(&self, vendor_id: &VendorId) -> Result<Vec<Order>, ApiError> {
        self.get(&format!("/order/vendor/{vendor_id}")).await
    }

    /// List a vendor's recent orders (dashboard view).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(vendor_id = %vendor_id))]
    pub async fn recent_orders(&self, vendor_id: &VendorId) -> Result<Vec<Order>, ApiError> {
        self.get(&format!("/order/recent-order/{vendor_id}")).await
    }

    /// Fetch one order scoped to a vendor.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the order does not exist for this
    /// vendor.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn order(&self, order_id: &OrderId, vendor_id: &VendorId) -> Result<Order, ApiError> {
        self.get(&format!("/order/{order_id}/vendor/{vendor_id}"))
            .await
    }

    /// Set an order's workflow status.
    ///
    /// Issues exactly one PUT with the literal status string; any status may
    /// be submitted regardless of the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self), fields(order_id = %order_id, new_status = %new_status))]
    pub async fn update_order_status(
        &self,
        order_id: &OrderId,
        vendor_id: &VendorId,
        new_status: OrderStatus,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/order/status/{order_id}/vendor/{vendor_id}"),
            &NewStatusRequest { new_status },
        )
        .await
    }

    /// Manually mark an order's payment status (vendor/admin override).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self), fields(order_id = %order_id, new_status = %new_status))]
    pub async fn verify_payment_manually(
        &self,
        order_id: &OrderId,
        new_status: PaymentStatus,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::POST,
            "/manually-verify-payment",
            &VerifyPaymentRequest {
                order_id,
                new_status,
            },
        )
        .await
    }

    /// Update one settlement lane (admin only).
    ///
    /// The request carries a single `type`/`status` pair; the other two
    /// lanes are untouched. Settling `floatingCash` as `Paid` also deducts
    /// from the driver's running cash debt - that arithmetic lives entirely
    /// server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write or the request
    /// fails.
    #[instrument(skip(self), fields(order_id = %order_id, kind = %kind, status = %status))]
    pub async fn update_settlement_status(
        &self,
        order_id: &OrderId,
        kind: SettlementKind,
        status: SettlementStatus,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/admin-update-payment-status/{order_id}"),
            &SettlementRequest { kind, status },
        )
        .await
    }
}
