//! Order status, payment, and settlement update contracts.
//!
//! The console submits whatever the operator selected: every status value
//! results in exactly one PUT carrying the literal wire string, with no
//! client-side transition rejection, and each settlement update touches
//! exactly one lane.

use serde_json::json;

use mango_market_core::{
    OrderId, OrderStatus, PaymentStatus, SettlementKind, SettlementStatus, VendorId,
};
use mango_market_integration_tests::TestBackend;

#[tokio::test]
async fn every_status_submits_one_put_with_the_literal_value() {
    let backend = TestBackend::spawn().await;
    backend.stub("PUT", "/order/status/o1/vendor/v1", 200, json!({}));

    let client = backend.authed_client().await;
    let order_id = OrderId::new("o1");
    let vendor_id = VendorId::new("v1");

    for status in OrderStatus::ALL {
        client
            .update_order_status(&order_id, &vendor_id, status)
            .await
            .expect("status update should succeed");
    }

    let requests = backend.requests_to("PUT", "/order/status/o1/vendor/v1");
    assert_eq!(requests.len(), OrderStatus::ALL.len(), "one PUT per update");

    let expected = [
        "In Review",
        "Pending",
        "Processing",
        "Shipped",
        "Delivered",
        "Cancelled",
    ];
    for (request, literal) in requests.iter().zip(expected) {
        assert_eq!(request.json_body(), &json!({ "newStatus": literal }));
        assert!(request.bearer, "status updates carry the bearer token");
    }
}

#[tokio::test]
async fn backward_transition_is_submitted_not_rejected() {
    let backend = TestBackend::spawn().await;
    backend.stub("PUT", "/order/status/o2/vendor/v1", 200, json!({}));

    let client = backend.authed_client().await;

    // Delivered back to In Review: nothing client-side stops this.
    client
        .update_order_status(&OrderId::new("o2"), &VendorId::new("v1"), OrderStatus::InReview)
        .await
        .expect("backward move should be submitted");

    let requests = backend.requests_to("PUT", "/order/status/o2/vendor/v1");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests.first().expect("one request").json_body(),
        &json!({ "newStatus": "In Review" })
    );
}

#[tokio::test]
async fn manual_payment_verification_posts_order_and_status() {
    let backend = TestBackend::spawn().await;
    backend.stub("POST", "/manually-verify-payment", 200, json!({}));

    let client = backend.authed_client().await;
    client
        .verify_payment_manually(&OrderId::new("o1"), PaymentStatus::Paid)
        .await
        .expect("verification should succeed");

    let requests = backend.requests_to("POST", "/manually-verify-payment");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests.first().expect("one request").json_body(),
        &json!({ "orderId": "o1", "newStatus": "Paid" })
    );
}

#[tokio::test]
async fn floating_cash_settlement_targets_only_its_lane() {
    let backend = TestBackend::spawn().await;
    backend.stub("PUT", "/admin-update-payment-status/o1", 200, json!({}));

    let client = backend.authed_client().await;
    client
        .update_settlement_status(
            &OrderId::new("o1"),
            SettlementKind::FloatingCash,
            SettlementStatus::Paid,
        )
        .await
        .expect("settlement update should succeed");

    let requests = backend.requests_to("PUT", "/admin-update-payment-status/o1");
    assert_eq!(requests.len(), 1);

    let body = requests.first().expect("one request").json_body().clone();
    assert_eq!(body, json!({ "type": "floatingCash", "status": "Paid" }));

    // The other two lanes never ride along.
    let object = body.as_object().expect("body is an object");
    assert!(!object.contains_key("vendorPayment"));
    assert!(!object.contains_key("driverEarning"));
}

#[tokio::test]
async fn settlement_lanes_are_independent_requests() {
    let backend = TestBackend::spawn().await;
    backend.stub("PUT", "/admin-update-payment-status/o1", 200, json!({}));

    let client = backend.authed_client().await;
    for kind in [
        SettlementKind::VendorPayment,
        SettlementKind::DriverEarning,
        SettlementKind::FloatingCash,
    ] {
        client
            .update_settlement_status(&OrderId::new("o1"), kind, SettlementStatus::Pending)
            .await
            .expect("settlement update should succeed");
    }

    let requests = backend.requests_to("PUT", "/admin-update-payment-status/o1");
    assert_eq!(requests.len(), 3, "one request per lane");
    let kinds: Vec<_> = requests
        .iter()
        .map(|request| request.json_body()["type"].clone())
        .collect();
    assert_eq!(
        kinds,
        vec![
            json!("vendorPayment"),
            json!("driverEarning"),
            json!("floatingCash")
        ]
    );
}
