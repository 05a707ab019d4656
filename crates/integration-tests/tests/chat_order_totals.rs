//! Chat-order total recomputation.
//!
//! A row with price=100, quantity=2, discount=10 totals 180.00; editing any
//! of the three fields recomputes the total client-side, and the backend
//! only ever receives recomputed amounts.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::json;

use mango_market_client::types::LineEdit;
use mango_market_core::ChatOrderId;
use mango_market_integration_tests::TestBackend;

fn chat_order_body() -> serde_json::Value {
    json!({
        "_id": "c1",
        "orderMessage": "2kg mangoes please",
        "products": [
            { "name": "Mangoes", "price": "100", "quantity": 2, "discount": "10" }
        ],
        "orderStatus": "Pending",
        "paymentStatus": "Unpaid",
        "totalAmount": "0",
        "createdAt": "2026-05-04T10:15:00Z"
    })
}

#[tokio::test]
async fn editing_each_field_recomputes_the_total() {
    let backend = TestBackend::spawn().await;
    backend.stub("GET", "/chat-order/c1", 200, chat_order_body());

    let client = backend.authed_client().await;
    let baseline = client
        .chat_order(&ChatOrderId::new("c1"))
        .await
        .expect("chat order loads");

    let expected = Decimal::from_str("180.00").expect("decimal");

    // Re-applying the same value through any of the three fields lands on
    // the same recomputed total.
    for edit in [
        LineEdit::Price(Decimal::from_str("100").expect("decimal")),
        LineEdit::Quantity(2),
        LineEdit::Discount(Decimal::from_str("10").expect("decimal")),
    ] {
        let mut order = baseline.clone();
        assert!(order.edit_line(0, edit));
        assert_eq!(order.total_amount, expected);
    }
}

#[tokio::test]
async fn submitted_update_carries_the_recomputed_total() {
    let backend = TestBackend::spawn().await;
    backend.stub("GET", "/chat-order/c1", 200, chat_order_body());
    backend.stub("PUT", "/chat/updateChatOrder", 200, json!({}));

    let client = backend.authed_client().await;
    let mut order = client
        .chat_order(&ChatOrderId::new("c1"))
        .await
        .expect("chat order loads");

    assert!(order.edit_line(0, LineEdit::Quantity(3)));

    client
        .update_chat_order(&order)
        .await
        .expect("update should succeed");

    let requests = backend.requests_to("PUT", "/chat/updateChatOrder");
    assert_eq!(requests.len(), 1);
    let body = requests.first().expect("one request").json_body().clone();
    assert_eq!(body["orderId"], "c1");
    // 100 * 3 * 0.9
    assert_eq!(body["totalAmount"], "270.00");
}

#[tokio::test]
async fn stale_total_on_the_order_never_reaches_the_backend() {
    let backend = TestBackend::spawn().await;
    backend.stub("GET", "/chat-order/c1", 200, chat_order_body());
    backend.stub("PUT", "/chat/updateChatOrder", 200, json!({}));

    let client = backend.authed_client().await;
    // The stubbed body carries a stale totalAmount of 0.
    let order = client
        .chat_order(&ChatOrderId::new("c1"))
        .await
        .expect("chat order loads");

    client
        .update_chat_order(&order)
        .await
        .expect("update should succeed");

    let requests = backend.requests_to("PUT", "/chat/updateChatOrder");
    let body = requests.first().expect("one request").json_body().clone();
    assert_eq!(body["totalAmount"], "180.00", "total is recomputed on submit");
}

#[tokio::test]
async fn status_with_amount_submits_the_recomputed_total() {
    let backend = TestBackend::spawn().await;
    backend.stub("PUT", "/chat-order-status-amount", 200, json!({}));

    let client = backend.authed_client().await;
    client
        .update_chat_order_status_amount(
            &ChatOrderId::new("c1"),
            mango_market_core::OrderStatus::Processing,
            Decimal::from_str("180.00").expect("decimal"),
        )
        .await
        .expect("update should succeed");

    let requests = backend.requests_to("PUT", "/chat-order-status-amount");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests.first().expect("one request").json_body(),
        &json!({
            "orderId": "c1",
            "newStatus": "Processing",
            "totalAmount": "180.00"
        })
    );
}
