// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::message::ErrorResponse;
use crate::services::model_client::ModelError;

pub const VALIDATION_MESSAGE: &str = "Message is required and must be a non-empty string";
pub const UPSTREAM_MESSAGE: &str = "Failed to communicate with AI service";
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Outcome of a failed chat request.
///
/// `Validation` and `Upstream` are answered by the chat handler itself.
/// `Unexpected` falls through to the generic 500 response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    #[error("upstream error (status {status:?}): {message}")]
    Upstream { status: Option<u16>, message: String },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Api { status, message } => AppError::Upstream {
                status: Some(status),
                message,
            },
            ModelError::Transport(message) => AppError::Upstream {
                status: None,
                message,
            },
            other => AppError::Unexpected(other.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Validation => ErrorResponse {
                error: VALIDATION_MESSAGE.to_string(),
                details: None,
            },
            AppError::Upstream { status: upstream, message } => {
                warn!(status = ?upstream, %message, "Anthropic API error");
                ErrorResponse {
                    error: UPSTREAM_MESSAGE.to_string(),
                    details: Some(message),
                }
            }
            AppError::Unexpected(err) => {
                error!(error = ?err, "unhandled error in request");
                ErrorResponse {
                    error: INTERNAL_MESSAGE.to_string(),
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
