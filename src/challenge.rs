// src/challenge.rs
use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, RngCore};

// 128 bits of nonce entropy
const NONCE_BYTES: usize = 16;

/// A freshly issued login challenge. Never persisted; the message carries
/// its own nonce and issuance time.
pub struct Challenge {
    pub message: String,
    pub nonce: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug)]
pub enum ChallengeError {
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}

/// Generate a unique challenge message for the client to sign.
///
/// The nonce comes from the OS CSPRNG; if that fails the call errors out
/// rather than falling back to a predictable source.
pub fn issue() -> Result<Challenge, ChallengeError> {
    let mut b = [0u8; NONCE_BYTES];
    OsRng.try_fill_bytes(&mut b)?;
    let nonce = bs58::encode(b).into_string();

    let issued_at = Utc::now();
    let message = format!(
        "Login request - Nonce: {nonce} - Time: {}",
        issued_at.timestamp_millis()
    );

    Ok(Challenge {
        message,
        nonce,
        issued_at,
    })
}
