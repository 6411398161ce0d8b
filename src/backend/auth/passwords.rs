//! Password Hashing
//!
//! bcrypt is CPU-bound, so the async helpers move the work onto the blocking
//! thread pool.

use once_cell::sync::Lazy;
use thiserror::Error;

/// bcrypt work factor for stored passwords
pub const BCRYPT_COST: u32 = 12;

/// Hash compared against when the account does not exist, so a failed
/// login costs the same whether or not the email is registered
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    bcrypt::hash("placeholder-password-0", BCRYPT_COST).unwrap_or_default()
});

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub fn hash_password(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    hash_password_with_cost(plaintext, BCRYPT_COST)
}

pub fn hash_password_with_cost(plaintext: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plaintext, cost)
}

/// Compare a plaintext password against a stored hash
///
/// A malformed hash counts as a mismatch.
pub fn verify_password(hash: &str, plaintext: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or_else(|e| {
        tracing::warn!("Password verification error: {:?}", e);
        false
    })
}

/// Hash on the blocking pool
pub async fn hash_in_background(plaintext: String) -> Result<String, PasswordError> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&plaintext)).await??;
    Ok(hash)
}

/// Verify on the blocking pool
///
/// With no stored hash the password is checked against a fixed dummy hash
/// and the result is always `false`.
pub async fn verify_in_background(hash: Option<String>, plaintext: String) -> bool {
    let result = tokio::task::spawn_blocking(move || match hash {
        Some(hash) => verify_password(&hash, &plaintext),
        None => {
            let _ = verify_password(&DUMMY_HASH, &plaintext);
            false
        }
    })
    .await;

    result.unwrap_or_else(|e| {
        tracing::error!("Password verification task failed: {:?}", e);
        false
    })
}
