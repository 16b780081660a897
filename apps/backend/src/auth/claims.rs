//! Claim set carried inside access tokens.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const ID_CLAIM: &str = "id";
pub const EMAIL_CLAIM: &str = "email";
pub const ISSUED_AT_CLAIM: &str = "iat";
pub const EXPIRY_CLAIM: &str = "exp";

/// Primary key of a user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("claim `{0}` is missing")]
    Missing(&'static str),
    #[error("claim `{0}` has an unexpected type")]
    WrongType(&'static str),
}

/// Unordered claim name → scalar value mapping embedded in a token.
///
/// Built once before issuing and only read after verification; the
/// builder methods consume `self`, there is no in-place mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(Map<String, Value>);

impl ClaimSet {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// The identity + email pair every access token carries.
    pub fn for_user(user_id: UserId, email: impl Into<String>) -> Self {
        Self::new()
            .with_claim(ID_CLAIM, user_id.0)
            .with_claim(EMAIL_CLAIM, email.into())
    }

    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn with_issued_at(self, iat: i64) -> Self {
        self.with_claim(ISSUED_AT_CLAIM, iat)
    }

    pub fn with_expiry(self, exp: i64) -> Self {
        self.with_claim(EXPIRY_CLAIM, exp)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Identity claim. A missing or non-integer `id` is an error, never a default.
    pub fn user_id(&self) -> Result<UserId, ClaimError> {
        let value = self.get(ID_CLAIM).ok_or(ClaimError::Missing(ID_CLAIM))?;
        value
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .map(UserId)
            .ok_or(ClaimError::WrongType(ID_CLAIM))
    }

    pub fn email(&self) -> Result<&str, ClaimError> {
        self.get(EMAIL_CLAIM)
            .ok_or(ClaimError::Missing(EMAIL_CLAIM))?
            .as_str()
            .ok_or(ClaimError::WrongType(EMAIL_CLAIM))
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.get(EXPIRY_CLAIM).and_then(Value::as_i64)
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
