//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use evaluator_types::domain::{Currency, PaymentMethod};
use evaluator_types::dto::{
    CustomerInfo, ErrorResponse, EvaluationResponse, TransactionEvaluationRequest,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Evaluate a transaction
///
/// Validates the payload against structural and business rules. Checks run in
/// a fixed order and only the first violated rule is reported.
#[utoipa::path(
    post,
    path = "/evaluate",
    tag = "transactions",
    request_body = TransactionEvaluationRequest,
    responses(
        (status = 200, description = "Transaction validation successful", body = EvaluationResponse),
        (status = 400, description = "Invalid request body or validation failed", body = ErrorResponse,
            example = json!({"error": "Validation failed", "details": "customer email is invalid"}))
    )
)]
async fn evaluate() {}

/// OpenAPI documentation for the Evaluator API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Transaction Evaluator API",
        version = "1.0.0",
        description = "Validation gateway for transaction payloads.\n\nA request is accepted when the amount is positive, the currency and payment method are known, and every customer field is present with a well-formed email.",
        license(name = "MIT"),
    ),
    paths(health, evaluate),
    components(
        schemas(
            TransactionEvaluationRequest,
            CustomerInfo,
            EvaluationResponse,
            ErrorResponse,
            Currency,
            PaymentMethod,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "transactions", description = "Transaction payload evaluation"),
    )
)]
pub struct ApiDoc;
