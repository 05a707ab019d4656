//! Order types.

use chrono::{DateTime, Utc};
use mango_market_core::{
    DriverId, OrderId, OrderStatus, PaymentStatus, ProductId, SettlementStatus, VendorId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A marketplace order, grouped per vendor.
///
/// `order_status` and `payment_status` are independent machines; the three
/// settlement lanes are admin-only and updated one at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    /// Short human-facing identifier shown in tables.
    #[serde(default)]
    pub short_id: Option<String>,
    /// Legacy order number carried by older records.
    #[serde(default)]
    pub order_id: Option<String>,
    pub customer: OrderCustomer,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default)]
    pub vendors: Vec<OrderVendorGroup>,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub vendor_payment_status: SettlementStatus,
    #[serde(default)]
    pub driver_earning_status: SettlementStatus,
    #[serde(default)]
    pub floating_cash_status: SettlementStatus,
    #[serde(default)]
    pub driver: Option<OrderDriver>,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Customer summary embedded in an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Delivery address embedded in an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// One vendor's slice of a multi-vendor order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderVendorGroup {
    pub vendor: OrderVendor,
    #[serde(default)]
    pub products: Vec<OrderLine>,
}

/// Vendor summary embedded in an order group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderVendor {
    #[serde(rename = "_id")]
    pub id: VendorId,
    #[serde(default)]
    pub name: String,
}

/// One purchased line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default)]
    pub product: Option<ProductId>,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub discount: Decimal,
}

/// Driver summary embedded in an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDriver {
    #[serde(rename = "_id")]
    pub id: DriverId,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes_wire_shape() {
        let json = serde_json::json!({
            "_id": "o1",
            "shortId": "MM-1042",
            "customer": { "name": "Ravi", "phone": "5550199" },
            "vendors": [{
                "vendor": { "_id": "v1", "name": "Green Grocer" },
                "products": [
                    { "name": "Mangoes 1kg", "price": "120.00", "quantity": 2 }
                ]
            }],
            "orderStatus": "In Review",
            "paymentStatus": "Unpaid",
            "floatingCashStatus": "Paid",
            "totalAmount": "240.00",
            "createdAt": "2026-05-04T10:15:00Z"
        });

        let order: Order = serde_json::from_value(json).unwrap();
        assert_eq!(order.order_status, OrderStatus::InReview);
        assert_eq!(order.payment_status, PaymentStatus::Unpaid);
        assert_eq!(order.vendor_payment_status, SettlementStatus::Pending);
        assert_eq!(order.floating_cash_status, SettlementStatus::Paid);
        assert_eq!(order.vendors.first().unwrap().products.len(), 1);
    }
}
