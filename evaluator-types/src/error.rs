//! Error types for the transaction evaluator.

/// Reasons a transaction-evaluation request is rejected.
///
/// Variants are listed in the order the validator checks them; only the
/// first violated rule is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("request is nil")]
    RequestMissing,

    #[error("amount_in_cents is required")]
    AmountRequired,

    #[error("amount_in_cents must be positive")]
    AmountMustBePositive,

    #[error("currency is required")]
    CurrencyRequired,

    #[error("currency is invalid")]
    CurrencyInvalid,

    #[error("payment_method is required")]
    PaymentMethodRequired,

    #[error("payment_method is invalid")]
    PaymentMethodInvalid,

    #[error("customer is required")]
    CustomerRequired,

    #[error("customer_id is required")]
    CustomerIdRequired,

    #[error("customer name is required")]
    CustomerNameRequired,

    #[error("customer email is required")]
    CustomerEmailRequired,

    #[error("customer email is invalid")]
    CustomerEmailInvalid,

    #[error("customer phone is required")]
    CustomerPhoneRequired,

    #[error("customer ip_address is required")]
    CustomerIpRequired,
}

/// Application-level errors (for HTTP responses).
///
/// Every variant is a client error; there is no server-side failure mode.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl AppError {
    /// Top-level message shown in the `error` field of the response.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::InvalidBody(_) => "Invalid request body",
            AppError::Validation(_) => "Validation failed",
        }
    }

    /// Specific reason shown in the `details` field of the response.
    pub fn details(&self) -> String {
        match self {
            AppError::InvalidBody(msg) => msg.clone(),
            AppError::Validation(err) => err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidBody(err.to_string())
    }
}
