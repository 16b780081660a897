//! Error codes for the photo API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the `code` field of
//! error responses.

use core::fmt;

/// Centralized error codes for the photo API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// No Authorization header on a protected route
    UnauthorizedMissingHeader,
    /// Authorization header present but not using the Bearer scheme
    UnauthorizedMalformedHeader,
    /// `Bearer ` prefix with nothing after it
    UnauthorizedMissingToken,
    /// Token could not be decoded
    UnauthorizedInvalidJwt,
    /// Token signed with an algorithm other than the pinned one
    UnauthorizedUnsupportedAlgorithm,
    /// Token signature does not match
    UnauthorizedSignatureMismatch,
    /// Token `exp` claim is in the past
    UnauthorizedExpiredJwt,
    /// Token verified but the identity claim is missing or mistyped
    UnauthorizedInvalidClaims,
    /// Login failed (unknown email or wrong password)
    InvalidCredentials,

    // Request Validation
    ValidationError,
    BadRequest,
    /// Request body is not valid JSON for the target type
    UnprocessableJson,
    InvalidPhotoId,
    InvalidEmail,

    // Resource Not Found
    PhotoNotFound,
    NotFound,

    // Conflicts
    UniqueEmail,
    UniqueUsername,
    /// Unique constraint violation not matched to a known column
    UniqueViolation,
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingHeader => "UNAUTHORIZED_MISSING_HEADER",
            Self::UnauthorizedMalformedHeader => "UNAUTHORIZED_MALFORMED_HEADER",
            Self::UnauthorizedMissingToken => "UNAUTHORIZED_MISSING_TOKEN",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedUnsupportedAlgorithm => "UNAUTHORIZED_UNSUPPORTED_ALGORITHM",
            Self::UnauthorizedSignatureMismatch => "UNAUTHORIZED_SIGNATURE_MISMATCH",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::UnauthorizedInvalidClaims => "UNAUTHORIZED_INVALID_CLAIMS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::UnprocessableJson => "UNPROCESSABLE_JSON",
            Self::InvalidPhotoId => "INVALID_PHOTO_ID",
            Self::InvalidEmail => "INVALID_EMAIL",

            Self::PhotoNotFound => "PHOTO_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::UniqueUsername => "UNIQUE_USERNAME",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
