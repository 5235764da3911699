//! HTTP error mapping for API-style routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use geneinfo_common::GeneInfoError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Gene(#[from] GeneInfoError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("{0}")]
    Disabled(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Gene(GeneInfoError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Gene(GeneInfoError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Gene(e) if e.is_retryable() => StatusCode::BAD_GATEWAY,
            ApiError::Disabled(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the user; internals stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Gene(GeneInfoError::NotFound { .. }) => "Gene not found".to_string(),
            ApiError::Gene(GeneInfoError::InvalidInput(msg)) => msg.clone(),
            ApiError::Gene(e) if e.is_retryable() => crate::view::RETRY_MESSAGE.to_string(),
            ApiError::Disabled(msg) => msg.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
