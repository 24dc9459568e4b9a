//! # Evaluator Types
//!
//! Domain types and wire contracts for the transaction evaluator.
//! This crate has ZERO IO dependencies - only data structures,
//! enumerations, and the error taxonomy.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `domain/` - Closed enumerations (Currency, PaymentMethod)
//! - `dto/` - Request and response shapes for the HTTP boundary
//! - `error/` - Validation and application error types

pub mod domain;
pub mod dto;
pub mod error;

// Re-export commonly used types
pub use domain::{Currency, PaymentMethod};
pub use dto::*;
pub use error::{AppError, ValidationError};
