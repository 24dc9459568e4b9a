//! Integration tests for the `/evaluate` route.
//!
//! These drive the full Axum router in-process, so they cover body parsing,
//! validation and the JSON shape of both success and error responses.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use evaluator_hex::{EvaluationService, inbound::HttpServer};
use http_body_util::BodyExt;
use tower::ServiceExt;

const VALID_BODY: &str = r#"{
    "amount_in_cents": 10000,
    "currency": "USD",
    "payment_method": "CARD",
    "customer": {
        "customer_id": "cust_123",
        "name": "John Doe",
        "email": "john@example.com",
        "phone": "+1234567890",
        "ip_address": "192.168.1.1"
    }
}"#;

fn app() -> axum::Router {
    HttpServer::new(EvaluationService::new()).router()
}

/// Helper to build a POST /evaluate request.
fn evaluate_request(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/evaluate")
        .header("Content-Type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Valid body with one top-level or customer field replaced.
fn body_with(path: &[&str], value: serde_json::Value) -> String {
    let mut json: serde_json::Value = serde_json::from_str(VALID_BODY).unwrap();
    let mut target = &mut json;
    for key in &path[..path.len() - 1] {
        target = &mut target[*key];
    }
    target[path[path.len() - 1]] = value;
    json.to_string()
}

async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_valid_transaction_returns_200() {
    let (status, json) = send(evaluate_request(VALID_BODY)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Transaction validation successful");

    let expected: serde_json::Value = serde_json::from_str(VALID_BODY).unwrap();
    assert_eq!(json["data"], expected);
}

#[tokio::test]
async fn test_zero_amount_returns_validation_failed() {
    let body = body_with(&["amount_in_cents"], serde_json::json!(0));
    let (status, json) = send(evaluate_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["details"], "amount_in_cents is required");
}

#[tokio::test]
async fn test_malformed_json_returns_invalid_body() {
    let (status, json) = send(evaluate_request("{invalid json}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
    assert!(!json["details"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_field_type_returns_invalid_body() {
    let body = body_with(&["amount_in_cents"], serde_json::json!("ten"));
    let (status, json) = send(evaluate_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
}

#[tokio::test]
async fn test_invalid_currency_returns_validation_failed() {
    let body = body_with(&["currency"], serde_json::json!("INVALID"));
    let (status, json) = send(evaluate_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["details"], "currency is invalid");
}

#[tokio::test]
async fn test_invalid_payment_method_returns_validation_failed() {
    let body = body_with(&["payment_method"], serde_json::json!("PAYPAL"));
    let (status, json) = send(evaluate_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"], "payment_method is invalid");
}

#[tokio::test]
async fn test_invalid_email_returns_validation_failed() {
    let body = body_with(&["customer", "email"], serde_json::json!("invalid@domain"));
    let (status, json) = send(evaluate_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"], "customer email is invalid");
}

#[tokio::test]
async fn test_missing_customer_returns_validation_failed() {
    let body = r#"{"amount_in_cents": 100, "currency": "EUR", "payment_method": "CRYPTO"}"#;
    let (status, json) = send(evaluate_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["details"], "customer is required");
}

#[tokio::test]
async fn test_null_body_is_missing_request() {
    let (status, json) = send(evaluate_request("null")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["details"], "request is nil");
}

#[tokio::test]
async fn test_empty_body_is_zero_value_request() {
    let (status, json) = send(evaluate_request("")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["details"], "amount_in_cents is required");
}

#[tokio::test]
async fn test_whitespace_body_returns_invalid_body() {
    let (status, json) = send(evaluate_request("   ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
}

#[tokio::test]
async fn test_body_without_content_type_is_parsed() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/evaluate")
        .body(Body::from(VALID_BODY))
        .unwrap();
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_root_banner() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Hello, World!");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/evaluate"].is_object());
}
