// Error mapping without HTTP or database dependencies
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let app: AppError = DomainError::validation("title is required").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.message(), "title is required");
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::conflict(ConflictKind::UniqueEmail, "email exists").into();
    assert_eq!(app.code().as_str(), "UNIQUE_EMAIL");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::conflict(ConflictKind::UniqueUsername, "username taken").into();
    assert_eq!(app.code().as_str(), "UNIQUE_USERNAME");

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("Unique".into()), "duplicate").into();
    assert_eq!(app.code().as_str(), "UNIQUE_VIOLATION");

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("something".into()), "generic").into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Photo, "photo not found").into();
    assert_eq!(app.code().as_str(), "PHOTO_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.message(), "photo not found");
}

#[test]
fn maps_infra_without_leaking_detail() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "pool timed out").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));
    assert_eq!(app.message(), "something went wrong");

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError =
        DomainError::infra(InfraErrorKind::Other("DbErr".into()), "syntax error at 42").into();
    assert_eq!(app.status().as_u16(), 500);
    assert!(!app.message().contains("syntax"));
}

#[test]
fn gate_rejections_have_distinct_codes_and_fixed_messages() {
    let missing = AppError::unauthorized_missing_header();
    let malformed = AppError::unauthorized_malformed_header();
    let no_token = AppError::unauthorized_missing_token();

    assert_eq!(missing.message(), "authorization header is missing");
    assert_eq!(malformed.message(), "authorization header is missing");
    assert_eq!(no_token.message(), "token is missing");
    assert_ne!(missing.code(), malformed.code());
    assert_eq!(no_token.status().as_u16(), 401);
    assert!(missing.reason().is_none());
}
