//! CSRF tokens for HTML forms
//!
//! A token is `"{issued_at}.{hash}"` where `hash` is the hex SHA-256 of
//! `"{secret_key}:{issued_at}"`. Tokens are stateless: any instance sharing
//! the secret key can verify them. They expire after [`TOKEN_MAX_AGE_SECS`].

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Tokens older than this are rejected
pub const TOKEN_MAX_AGE_SECS: i64 = 3600;

/// Allowed clock skew for tokens issued "in the future"
const MAX_CLOCK_SKEW_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsrfError {
    #[error("The CSRF token is missing.")]
    Missing,

    #[error("The CSRF token is invalid.")]
    Invalid,

    #[error("The CSRF token has expired.")]
    Expired,
}

/// Issue a token for the current time
pub fn issue_token(secret_key: &str) -> String {
    issue_token_at(secret_key, chrono::Utc::now().timestamp())
}

pub fn issue_token_at(secret_key: &str, issued_at: i64) -> String {
    format!("{}.{}", issued_at, sign(secret_key, issued_at))
}

/// Verify a submitted token against the current time
pub fn verify_token(secret_key: &str, token: Option<&str>) -> Result<(), CsrfError> {
    verify_token_at(secret_key, token, chrono::Utc::now().timestamp())
}

pub fn verify_token_at(secret_key: &str, token: Option<&str>, now: i64) -> Result<(), CsrfError> {
    let token = match token.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(CsrfError::Missing),
    };

    let (issued_at, hash) = token.split_once('.').ok_or(CsrfError::Invalid)?;
    let issued_at: i64 = issued_at.parse().map_err(|_| CsrfError::Invalid)?;

    if hash != sign(secret_key, issued_at) {
        return Err(CsrfError::Invalid);
    }

    if issued_at > now + MAX_CLOCK_SKEW_SECS {
        return Err(CsrfError::Invalid);
    }

    if now - issued_at > TOKEN_MAX_AGE_SECS {
        return Err(CsrfError::Expired);
    }

    Ok(())
}

fn sign(secret_key: &str, issued_at: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret_key.as_bytes());
    hasher.update(b":");
    hasher.update(issued_at.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}
