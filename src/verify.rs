// src/verify.rs
use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

/// A public key whose signature over the submitted message checked out.
///
/// Only `verify_proof` can construct one, so profile resolution cannot be
/// reached with an unverified key. Holds the canonical base-58 string the
/// client supplied, which is also the store lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedKey(String);

impl VerifiedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VerifyError {
    #[error("public key does not decode to a valid ed25519 point")]
    MalformedKey,
    #[error("signature does not decode to 64 bytes")]
    MalformedSignature,
    #[error("signature does not verify against message and key")]
    SignatureInvalid,
}

/// Verify a detached ed25519 signature over raw message bytes.
pub fn verify_detached(
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<(), VerifyError> {
    let key: &[u8; PUBLIC_KEY_LENGTH] = public_key
        .try_into()
        .map_err(|_| VerifyError::MalformedKey)?;
    let vk = VerifyingKey::from_bytes(key).map_err(|_| VerifyError::MalformedKey)?;

    if signature.len() != SIGNATURE_LENGTH {
        return Err(VerifyError::MalformedSignature);
    }
    let sig = Signature::from_slice(signature).map_err(|_| VerifyError::MalformedSignature)?;

    vk.verify(message, &sig)
        .map_err(|_| VerifyError::SignatureInvalid)
}

/// Decode a base-58 credential proof and verify it, yielding the verified
/// key on success.
pub fn verify_proof(
    public_key_b58: &str,
    message: &[u8],
    signature_b58: &str,
) -> Result<VerifiedKey, VerifyError> {
    let key_bytes = bs58::decode(public_key_b58)
        .into_vec()
        .map_err(|_| VerifyError::MalformedKey)?;
    let sig_bytes = bs58::decode(signature_b58)
        .into_vec()
        .map_err(|_| VerifyError::MalformedSignature)?;

    verify_detached(&key_bytes, message, &sig_bytes)?;
    Ok(VerifiedKey(public_key_b58.to_owned()))
}
