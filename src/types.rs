// src/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize)]
pub struct NonceRes {
    pub message: String,
    pub nonce: String,
}

#[derive(Deserialize)]
pub struct VerifyReq {
    #[serde(rename = "publicKey")]
    pub public_key: String,
    pub signature: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct VerifyRes {
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// Profile row from the external `users` table, returned verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: Option<String>,
    pub handle: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
