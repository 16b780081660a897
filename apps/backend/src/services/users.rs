use std::sync::LazyLock;
use std::time::SystemTime;

use regex::Regex;
use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::auth::claims::UserId;
use crate::auth::jwt::mint_access_token;
use crate::auth::password::{hash_password, verify_password, MAX_PASSWORD_BYTES};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::logging::security as security_log;
use crate::repos::users::{self, User};
use crate::state::security_config::SecurityConfig;

const MIN_PASSWORD_CHARS: usize = 6;
const MIN_AGE_EXCLUSIVE: i32 = 8;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap()
    });
    &EMAIL_REGEX
}

/// Registration input as received from the client.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: i32,
}

impl Registration {
    /// Field rules, checked in declaration order; the first failure wins.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username.trim().is_empty() {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "username is required",
            ));
        }
        validate_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "password must be at least 6 characters",
            ));
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "password must be at most 72 bytes",
            ));
        }
        if self.age <= MIN_AGE_EXCLUSIVE {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "age must be greater than 8",
            ));
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(AppError::invalid(ErrorCode::InvalidEmail, "email is invalid"))
    }
}

/// Validate, hash and insert a new user.
pub async fn register(
    conn: &(impl ConnectionTrait + Send + Sync),
    security: &SecurityConfig,
    registration: Registration,
) -> Result<User, AppError> {
    registration.validate()?;

    let password_hash = hash_password(registration.password, security.bcrypt_cost).await?;
    let user = users::create_user(
        conn,
        registration.username.trim(),
        &registration.email,
        &password_hash,
        registration.age,
    )
    .await?;

    info!(user_id = user.id, email = %Redacted(&user.email), "user registered");
    Ok(user)
}

/// Check credentials and mint an access token.
///
/// An unknown email and a wrong password produce the same error.
pub async fn login(
    conn: &(impl ConnectionTrait + Send + Sync),
    security: &SecurityConfig,
    email: &str,
    password: &str,
) -> Result<String, AppError> {
    validate_email(email)?;
    if password.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "password is required",
        ));
    }

    let Some(user) = users::find_user_by_email(conn, email).await? else {
        security_log::login_failed("unknown_email", email);
        return Err(AppError::invalid_credentials());
    };

    // bcrypt only sees the first 72 bytes; longer input can never be a stored password.
    if password.len() > MAX_PASSWORD_BYTES
        || !verify_password(password.to_string(), user.password_hash.clone()).await?
    {
        debug!(user_id = user.id, "password mismatch");
        security_log::login_failed("wrong_password", email);
        return Err(AppError::invalid_credentials());
    }

    let token = mint_access_token(UserId(user.id), &user.email, SystemTime::now(), security)?;
    info!(user_id = user.id, "user logged in");
    Ok(token)
}
