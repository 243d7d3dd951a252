// src/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error};

use crate::challenge::ChallengeError;
use crate::store::StoreError;
use crate::verify::VerifyError;

/// Terminal request error, already classified for the client.
#[derive(Debug)]
pub enum AppError {
    /// 400-class. The client only ever sees one generic message, so it
    /// cannot distinguish a malformed proof from a wrong key.
    Rejected(VerifyError),
    /// 500-class. Generic message to the client; detail stays in the logs.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Rejected(e) => {
                debug!("proof rejected: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "invalid signature"})),
                )
                    .into_response()
            }
            AppError::Internal(detail) => {
                error!("{detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl From<VerifyError> for AppError {
    fn from(e: VerifyError) -> Self {
        AppError::Rejected(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<ChallengeError> for AppError {
    fn from(e: ChallengeError) -> Self {
        AppError::Internal(e.to_string())
    }
}
