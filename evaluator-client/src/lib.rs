//! # Evaluator Client SDK
//!
//! A typed Rust client for the Transaction Evaluator API.

use evaluator_types::{ErrorResponse, EvaluationResponse, TransactionEvaluationRequest};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {error}: {details}")]
    Api {
        status: u16,
        error: String,
        details: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Evaluator API client.
pub struct EvaluatorClient {
    base_url: String,
    http: Client,
}

impl EvaluatorClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Submits a transaction for evaluation.
    ///
    /// A rejected transaction comes back as [`ClientError::Api`] carrying the
    /// server's `error` and `details` fields.
    pub async fn evaluate(
        &self,
        req: &TransactionEvaluationRequest,
    ) -> Result<EvaluationResponse, ClientError> {
        self.post("/evaluate", req).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let (error, details) = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(parsed) => (parsed.error, parsed.details),
                Err(_) => (
                    status.canonical_reason().unwrap_or("Unknown").to_string(),
                    body,
                ),
            };
            Err(ClientError::Api {
                status: status.as_u16(),
                error,
                details,
            })
        }
    }
}
