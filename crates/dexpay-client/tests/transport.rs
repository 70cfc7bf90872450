//! Request pipeline integration tests: headers, bodies, error normalization
//! and timeouts.

mod common;

use std::time::Duration;

use common::{TestHarness, API_KEY, API_SECRET};
use dexpay_client::{DexPay, DexPayConfig, DexPayError};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Success path
// ============================================================================

#[tokio::test]
async fn success_returns_body_unchanged() {
    let harness = TestHarness::new().await;
    let body = json!({
        "id": "cs_123",
        "reference": "REF_123",
        "status": "COMPLETED",
        "nested": { "list": [1, 2, 3], "flag": null },
        "client_support_fee": false
    });

    Mock::given(method("GET"))
        .and(path(TestHarness::path("/checkout-sessions/cs_123")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&harness.server)
        .await;

    let value: Value = harness
        .dexpay
        .http()
        .get("/checkout-sessions/cs_123")
        .await
        .unwrap();

    assert_eq!(value, body);
}

#[tokio::test]
async fn every_request_carries_auth_headers() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path(TestHarness::path("/products")))
        .and(header("x-api-key", API_KEY))
        .and(header("x-api-secret", API_SECRET))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let _: Value = harness.dexpay.http().get("/products").await.unwrap();
}

#[tokio::test]
async fn get_and_delete_send_no_body() {
    let harness = TestHarness::new().await;

    Mock::given(path(TestHarness::path("/customers/cus_1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(2)
        .mount(&harness.server)
        .await;

    let _: Value = harness.dexpay.http().get("/customers/cus_1").await.unwrap();
    let _: Value = harness.dexpay.http().delete("/customers/cus_1").await.unwrap();

    for request in harness.received().await {
        assert!(request.body.is_empty(), "{} carried a body", request.method);
    }
}

#[tokio::test]
async fn post_serializes_body_as_json() {
    let harness = TestHarness::new().await;
    let payload = json!({ "reason": "Demande client" });

    Mock::given(method("POST"))
        .and(path(TestHarness::path("/payouts/po_1/cancel")))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "po_1" })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let value: Value = harness
        .dexpay
        .http()
        .post("/payouts/po_1/cancel", &payload)
        .await
        .unwrap();

    assert_eq!(value["id"], "po_1");
}

// ============================================================================
// API errors
// ============================================================================

#[tokio::test]
async fn api_error_carries_server_message_and_code() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path(TestHarness::path("/checkout-sessions")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Invalid amount",
            "code": "INVALID_AMOUNT"
        })))
        .mount(&harness.server)
        .await;

    let err = harness
        .dexpay
        .http()
        .post::<Value, _>("/checkout-sessions", &json!({ "amount": -100 }))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DexPayError::Api {
            message: "Invalid amount".into(),
            status_code: 400,
            code: "INVALID_AMOUNT".into(),
        }
    );
}

#[tokio::test]
async fn api_error_falls_back_to_error_field() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path(TestHarness::path("/payouts/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Payout not found" })))
        .mount(&harness.server)
        .await;

    let err = harness
        .dexpay
        .http()
        .get::<Value>("/payouts/missing")
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Payout not found");
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.code(), "UNKNOWN_ERROR");
}

#[tokio::test]
async fn api_error_without_details_uses_defaults() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path(TestHarness::path("/products")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "success": false })))
        .mount(&harness.server)
        .await;

    let err = harness
        .dexpay
        .http()
        .get::<Value>("/products")
        .await
        .unwrap_err();

    assert!(err.is_api());
    assert_eq!(err.message(), "An error occurred");
    assert_eq!(err.code(), "UNKNOWN_ERROR");
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn non_json_error_body_is_a_network_error() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path(TestHarness::path("/products")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&harness.server)
        .await;

    let err = harness
        .dexpay
        .http()
        .get::<Value>("/products")
        .await
        .unwrap_err();

    assert!(matches!(err, DexPayError::Network { .. }));
    assert_eq!(err.code(), "NETWORK_ERROR");
}

#[tokio::test]
async fn partial_success_body_passes_through() {
    let harness = TestHarness::new().await;
    let body = json!({ "id": "po_1", "status": "COMPLETED", "batch": { "size": 3 } });

    Mock::given(method("GET"))
        .and(path(TestHarness::path("/payouts/po_1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&harness.server)
        .await;

    let payout = harness.dexpay.payouts.retrieve("po_1").await.unwrap();

    assert_eq!(payout.id, "po_1");
    assert_eq!(payout.amount, None);
    assert_eq!(serde_json::to_value(&payout).unwrap(), body);
}

#[tokio::test]
async fn non_object_success_body_is_unknown_error() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path(TestHarness::path("/payouts/po_1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
        .mount(&harness.server)
        .await;

    let err = harness.dexpay.payouts.retrieve("po_1").await.unwrap_err();

    assert!(matches!(err, DexPayError::Unknown { .. }));
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.code(), "UNKNOWN_ERROR");
}

// ============================================================================
// Network errors and timeouts
// ============================================================================

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    // Port 1 is reserved and nothing listens on it.
    let dexpay = DexPay::new(
        DexPayConfig::new(API_KEY, API_SECRET).with_base_url("http://127.0.0.1:1/api/v1"),
    )
    .unwrap();

    let err = dexpay.checkout_sessions.retrieve("cs_123").await.unwrap_err();

    match &err {
        DexPayError::Network { message } => assert!(!message.is_empty()),
        other => panic!("expected network error, got {other:?}"),
    }
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.code(), "NETWORK_ERROR");
}

#[tokio::test]
async fn slow_response_times_out() {
    let harness = TestHarness::with_timeout_ms(Some(100)).await;

    Mock::given(method("GET"))
        .and(path(TestHarness::path("/checkout-sessions/cs_slow")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "cs_slow" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&harness.server)
        .await;

    let err = harness
        .dexpay
        .http()
        .get::<Value>("/checkout-sessions/cs_slow")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DexPayError::Timeout {
            after: Duration::from_millis(100)
        }
    );
    assert_eq!(err.status_code(), 408);
    assert_eq!(err.code(), "TIMEOUT");
    assert_eq!(err.message(), "Request timeout");
}

#[tokio::test]
async fn slow_error_response_still_times_out() {
    let harness = TestHarness::with_timeout_ms(Some(100)).await;

    Mock::given(method("GET"))
        .and(path(TestHarness::path("/products")))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "message": "too late", "code": "LATE" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&harness.server)
        .await;

    let err = harness
        .dexpay
        .http()
        .get::<Value>("/products")
        .await
        .unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn timeout_does_not_affect_other_calls() {
    let harness = TestHarness::with_timeout_ms(Some(300)).await;

    Mock::given(method("GET"))
        .and(path(TestHarness::path("/slow")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path(TestHarness::path("/fast")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "fast": true })))
        .mount(&harness.server)
        .await;

    let http = harness.dexpay.http();
    let (slow, fast) = tokio::join!(http.get::<Value>("/slow"), http.get::<Value>("/fast"));

    assert!(slow.unwrap_err().is_timeout());
    assert_eq!(fast.unwrap(), json!({ "fast": true }));
}
