// src/routes.rs
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::challenge;
use crate::error::AppError;
use crate::store::ProfileStore;
use crate::types::{NonceRes, VerifyReq, VerifyRes};
use crate::verify::verify_proof;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/nonce", get(nonce))
        .route("/api/verify", post(verify))
        .route("/health", get(health))
        .with_state(state)
}

// ---------- API HANDLERS ---------- //

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "OK", "message": "Server is running"}))
}

async fn nonce() -> Result<Json<NonceRes>, AppError> {
    let c = challenge::issue()?;
    Ok(Json(NonceRes {
        message: c.message,
        nonce: c.nonce,
    }))
}

/// Verify a credential proof and resolve the key to a profile.
///
/// The resolver runs at most once, and only after `verify_proof` has
/// accepted the signature; any rejection short-circuits to a 400.
async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyReq>,
) -> Result<Json<VerifyRes>, AppError> {
    let key = verify_proof(&req.public_key, req.message.as_bytes(), &req.signature)?;
    let profile = state.store.resolve(&key).await?;

    Ok(Json(VerifyRes {
        registered: profile.is_some(),
        profile,
    }))
}
