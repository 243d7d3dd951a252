// src/store.rs
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::types::Profile;
use crate::verify::VerifiedKey;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only lookup of the profile registered for a verified public key.
///
/// Injected as a capability so tests can substitute a fake. Taking a
/// [`VerifiedKey`] keeps the lookup unreachable for unverified requests.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn resolve(&self, key: &VerifiedKey) -> Result<Option<Profile>, StoreError>;
}

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn resolve(&self, key: &VerifiedKey) -> Result<Option<Profile>, StoreError> {
        let lookup = sqlx::query(
            "SELECT id, name, handle, image_url, created_at FROM users WHERE wallet=$1",
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool);

        let row = tokio::time::timeout(LOOKUP_TIMEOUT, lookup)
            .await
            .map_err(|_| StoreError::Unavailable("lookup timed out".into()))?
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(row.map(|r| Profile {
            id: r.get("id"),
            name: r.get("name"),
            handle: r.get("handle"),
            image_url: r.get("image_url"),
            created_at: r.get("created_at"),
        }))
    }
}
