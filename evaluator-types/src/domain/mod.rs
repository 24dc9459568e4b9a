//! Domain models for the transaction evaluator.

pub mod currency;
pub mod payment_method;

pub use currency::Currency;
pub use payment_method::PaymentMethod;
