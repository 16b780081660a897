//! Bearer token helpers for tests.

use std::time::{Duration, SystemTime};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use photo_api::auth::claims::{ClaimSet, UserId};
use photo_api::auth::jwt::{issue_token, mint_access_token};
use photo_api::state::security_config::SecurityConfig;

pub fn mint_test_token(user_id: i32, email: &str, sec: &SecurityConfig) -> String {
    mint_access_token(UserId(user_id), email, SystemTime::now(), sec).expect("mint token")
}

/// Full `Authorization` header value.
pub fn bearer_header(user_id: i32, email: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(user_id, email, sec))
}

/// Issued two hours ago with a ten minute lifetime.
pub fn mint_expired_token(user_id: i32, email: &str, sec: &SecurityConfig) -> String {
    let sec = sec.clone().with_token_ttl(Some(Duration::from_secs(600)));
    let past = SystemTime::now() - Duration::from_secs(7200);
    mint_access_token(UserId(user_id), email, past, &sec).expect("mint expired token")
}

/// Validly signed token whose claims are exactly `claims`.
pub fn sign_claims(claims: &ClaimSet, sec: &SecurityConfig) -> String {
    issue_token(claims, sec).expect("sign claims")
}

/// Same token with the first signature byte flipped.
pub fn corrupt_signature(token: &str) -> String {
    let (signing_input, signature) = token.rsplit_once('.').expect("three segments");
    let mut bytes = URL_SAFE_NO_PAD.decode(signature).expect("base64url signature");
    bytes[0] ^= 0x01;
    format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(bytes))
}
