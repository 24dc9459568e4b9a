//! Evaluation Application Service
//!
//! Runs the ordered payload checks for a transaction-evaluation request.
//! Contains NO infrastructure logic - a pure function plus a thin wrapper
//! for the inbound adapter.

use std::sync::LazyLock;

use regex::Regex;

use evaluator_types::{
    AppError, Currency, CustomerInfo, PaymentMethod, TransactionEvaluationRequest, ValidationError,
};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Validates a transaction-evaluation request.
///
/// Checks run in a fixed order and the first violated rule is returned:
/// amount, currency, payment method, then each customer field.
pub fn validate(req: Option<&TransactionEvaluationRequest>) -> Result<(), ValidationError> {
    let req = req.ok_or(ValidationError::RequestMissing)?;

    if req.amount_in_cents == 0 {
        return Err(ValidationError::AmountRequired);
    }
    if req.amount_in_cents < 0 {
        return Err(ValidationError::AmountMustBePositive);
    }

    // Emptiness is checked on the raw value; "  " is an invalid code.
    if req.currency.is_empty() {
        return Err(ValidationError::CurrencyRequired);
    }
    req.currency.parse::<Currency>()?;

    if req.payment_method.is_empty() {
        return Err(ValidationError::PaymentMethodRequired);
    }
    req.payment_method.parse::<PaymentMethod>()?;

    let customer = req
        .customer
        .as_ref()
        .ok_or(ValidationError::CustomerRequired)?;
    validate_customer(customer)
}

fn validate_customer(customer: &CustomerInfo) -> Result<(), ValidationError> {
    if is_blank(&customer.customer_id) {
        return Err(ValidationError::CustomerIdRequired);
    }

    if is_blank(&customer.name) {
        return Err(ValidationError::CustomerNameRequired);
    }

    if is_blank(&customer.email) {
        return Err(ValidationError::CustomerEmailRequired);
    }
    // Matched untrimmed: surrounding whitespace makes the address invalid.
    if !is_valid_email(&customer.email) {
        return Err(ValidationError::CustomerEmailInvalid);
    }

    if is_blank(&customer.phone) {
        return Err(ValidationError::CustomerPhoneRequired);
    }

    if is_blank(&customer.ip_address) {
        return Err(ValidationError::CustomerIpRequired);
    }

    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns true if `email` looks like `local-part@domain.tld`.
pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Application service for transaction evaluation.
///
/// Stateless; a single instance is shared across all requests.
#[derive(Debug, Clone, Default)]
pub struct EvaluationService;

impl EvaluationService {
    /// Creates a new evaluation service.
    pub fn new() -> Self {
        Self
    }

    /// Validates the request and hands it back on success.
    pub fn evaluate(
        &self,
        req: Option<TransactionEvaluationRequest>,
    ) -> Result<TransactionEvaluationRequest, AppError> {
        let req = req.ok_or(ValidationError::RequestMissing)?;
        validate(Some(&req))?;
        Ok(req)
    }
}
