//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use evaluator_types::{AppError, ErrorResponse, EvaluationResponse, TransactionEvaluationRequest};

use crate::EvaluationService;

/// Application state shared across handlers.
pub struct AppState {
    pub service: EvaluationService,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every failure the evaluator reports is the caller's fault.
        let body = ErrorResponse {
            error: self.0.title().to_string(),
            details: self.0.details(),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Liveness banner.
pub async fn root() -> &'static str {
    "Hello, World!"
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Validate a transaction-evaluation request.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that a missing content type or a malformed document is reported with the
/// parser's own message. A JSON `null` body is a missing request; an empty
/// body is the zero-value request.
#[tracing::instrument(skip_all, fields(body_len = body.len()))]
pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let raw: &[u8] = if body.is_empty() { b"{}" } else { &body };
    let req: Option<TransactionEvaluationRequest> =
        serde_json::from_slice(raw).map_err(|e| {
            tracing::debug!(error = %e, "rejecting unparsable body");
            AppError::from(e)
        })?;

    match state.service.evaluate(req) {
        Ok(req) => {
            tracing::info!(
                currency = %req.currency,
                payment_method = %req.payment_method,
                "transaction accepted"
            );
            Ok(Json(EvaluationResponse::success(req)))
        }
        Err(err) => {
            tracing::info!(reason = %err.details(), "transaction rejected");
            Err(err.into())
        }
    }
}
