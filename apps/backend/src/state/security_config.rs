use std::env;
use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_LEEWAY_SECS: u64 = 60;

/// Accepted bcrypt work factors.
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Process-wide token and credential settings, built once at startup and
/// shared read-only through `AppState`.
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Pinned signing algorithm (HS256)
    pub algorithm: Algorithm,
    /// Lifetime of minted access tokens; `None` mints tokens without `exp`
    pub token_ttl: Option<Duration>,
    /// Clock skew tolerated when checking `exp`
    pub leeway_secs: u64,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: Some(Duration::from_secs(DEFAULT_TOKEN_TTL_SECS)),
            leeway_secs: DEFAULT_LEEWAY_SECS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_token_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Reads `APP_JWT_SECRET` (required), `APP_JWT_TTL_SECS` (0 disables
    /// expiry) and `APP_BCRYPT_COST`.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var("APP_JWT_SECRET").map_err(|_| {
            AppError::config("Required environment variable 'APP_JWT_SECRET' is not set")
        })?;
        if secret.trim().is_empty() {
            return Err(AppError::config("APP_JWT_SECRET must not be empty"));
        }

        let ttl_secs = match env::var("APP_JWT_TTL_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!("APP_JWT_TTL_SECS must be a whole number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };
        let token_ttl = (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs));

        let bcrypt_cost = match env::var("APP_BCRYPT_COST") {
            Ok(raw) => {
                let cost = raw.trim().parse::<u32>().map_err(|_| {
                    AppError::config(format!("APP_BCRYPT_COST must be a number, got '{raw}'"))
                })?;
                if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
                    return Err(AppError::config(format!(
                        "APP_BCRYPT_COST must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"
                    )));
                }
                cost
            }
            Err(_) => bcrypt::DEFAULT_COST,
        };

        Ok(Self::new(secret.into_bytes())
            .with_token_ttl(token_ttl)
            .with_bcrypt_cost(bcrypt_cost))
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}

// The key never shows up in logs or panics.
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("token_ttl", &self.token_ttl)
            .field("leeway_secs", &self.leeway_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
