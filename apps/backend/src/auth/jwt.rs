use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use thiserror::Error;

use crate::auth::claims::{ClaimSet, UserId};
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Why a token was refused. Display strings are safe to return to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("unsupported signing algorithm")]
    UnsupportedAlgorithm,
    #[error("signature mismatch")]
    SignatureMismatch,
    #[error("token has expired")]
    Expired,
    #[error("failed to encode token: {0}")]
    Encode(String),
}

/// Sign a claim set with the configured HMAC key.
///
/// No expiry is added here; callers put `exp` in the claim set if they want one.
pub fn issue_token(claims: &ClaimSet, security: &SecurityConfig) -> Result<String, TokenError> {
    encode(
        &Header::new(security.algorithm),
        claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| TokenError::Encode(e.to_string()))
}

/// Mint the access token handed out at login: `{id, email, iat}` plus `exp`
/// when a TTL is configured.
pub fn mint_access_token(
    user_id: UserId,
    email: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let mut claims = ClaimSet::for_user(user_id, email).with_issued_at(iat);
    if let Some(ttl) = security.token_ttl {
        claims = claims.with_expiry(iat + ttl.as_secs() as i64);
    }

    issue_token(&claims, security).map_err(|e| AppError::internal(e.to_string()))
}

/// Verify a token and hand back its claims.
///
/// The algorithm is pinned to the configured one before any signature work, so
/// `alg: none` and cross-algorithm tokens never reach the decoder. Signature
/// comparison is constant-time (HMAC `verify_slice`). `exp` is only enforced
/// when present; `aud`, `iss`, `sub` and `nbf` are not interpreted.
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<ClaimSet, TokenError> {
    ensure_pinned_algorithm(token, security.algorithm)?;

    let mut validation = Validation::new(security.algorithm);
    validation.required_spec_claims.clear();
    // Registered claims other than `exp` are carried through untouched.
    validation.validate_aud = false;
    validation.validate_exp = true;
    validation.leeway = security.leeway_secs;

    decode::<ClaimSet>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenError::UnsupportedAlgorithm
        }
        _ => TokenError::Malformed,
    })
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

fn ensure_pinned_algorithm(token: &str, expected: Algorithm) -> Result<(), TokenError> {
    let mut segments = token.split('.');
    let header = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(header), Some(_), Some(_), None) => header,
        _ => return Err(TokenError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| TokenError::Malformed)?;
    let raw: RawHeader = serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)?;

    match Algorithm::from_str(&raw.alg) {
        Ok(alg) if alg == expected => Ok(()),
        _ => Err(TokenError::UnsupportedAlgorithm),
    }
}
