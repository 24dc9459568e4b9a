//! # Evaluator Hex
//!
//! Application service layer and HTTP adapter for the transaction evaluator.
//!
//! ## Architecture
//!
//! - `service/` - Validation service (ordered payload checks)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served alongside the API

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::{EvaluationService, validate};
