//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Enumerated fields travel as raw strings so that an unknown value reaches
//! the validator instead of failing deserialization. Missing scalars default
//! to their zero value and are rejected by the validator.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Currency, PaymentMethod};

/// Message returned with every accepted request.
pub const VALIDATION_SUCCESS_MESSAGE: &str = "Transaction validation successful";

// ─────────────────────────────────────────────────────────────────────────────
// Request DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A prospective transaction submitted for evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TransactionEvaluationRequest {
    /// Amount in the smallest currency unit (e.g., cents)
    #[serde(default)]
    #[schema(example = 10000)]
    pub amount_in_cents: i64,
    #[serde(default)]
    #[schema(value_type = Currency, example = "USD")]
    pub currency: String,
    #[serde(default)]
    #[schema(value_type = PaymentMethod, example = "CARD")]
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerInfo>,
}

impl TransactionEvaluationRequest {
    /// Builds a request from typed enumerations.
    pub fn new(
        amount_in_cents: i64,
        currency: Currency,
        payment_method: PaymentMethod,
        customer: CustomerInfo,
    ) -> Self {
        Self {
            amount_in_cents,
            currency: currency.as_str().to_string(),
            payment_method: payment_method.as_str().to_string(),
            customer: Some(customer),
        }
    }
}

/// The customer behind a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerInfo {
    #[serde(default)]
    #[schema(example = "cust_123")]
    pub customer_id: String,
    #[serde(default)]
    #[schema(example = "John Doe")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "john@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "+1234567890")]
    pub phone: String,
    #[serde(default)]
    #[schema(example = "192.168.1.1")]
    pub ip_address: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Response after a request passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EvaluationResponse {
    #[schema(example = "Transaction validation successful")]
    pub message: String,
    /// The validated request, echoed back
    pub data: TransactionEvaluationRequest,
}

impl EvaluationResponse {
    pub fn success(data: TransactionEvaluationRequest) -> Self {
        Self {
            message: VALIDATION_SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

/// Body of every 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Top-level failure category
    #[schema(example = "Validation failed")]
    pub error: String,
    /// Specific reason the request was rejected
    #[schema(example = "customer email is invalid")]
    pub details: String,
}
