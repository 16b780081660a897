mod common;
mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use common::assert_error_response;
use photo_api::auth::claims::ClaimSet;
use photo_api::extractors::CurrentUser;
use photo_api::middleware::Authentication;
use photo_api::state::app_state::AppState;
use serde_json::{json, Value};
use support::auth::{
    bearer_header, corrupt_signature, mint_expired_token, mint_test_token, sign_claims,
};
use support::{create_test_app, test_security};

/// Counts handler invocations so rejections can be shown to short-circuit.
#[derive(Clone, Default)]
struct Hits(Arc<AtomicUsize>);

impl Hits {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

async fn whoami(user: CurrentUser, hits: web::Data<Hits>) -> HttpResponse {
    hits.0.fetch_add(1, Ordering::SeqCst);
    HttpResponse::Ok().json(json!({ "id": user.id.0, "email": user.email }))
}

macro_rules! guarded_app {
    ($hits:expr) => {{
        let hits = web::Data::new($hits.clone());
        create_test_app(AppState::new_without_db(test_security()))
            .with_routes(move |cfg| {
                cfg.app_data(hits.clone()).service(
                    web::scope("/guarded")
                        .wrap(Authentication)
                        .route("", web::get().to(whoami)),
                );
            })
            .build()
            .await
    }};
}

fn guarded_request(auth: Option<&str>) -> actix_http::Request {
    let mut req = test::TestRequest::get().uri("/guarded");
    if let Some(value) = auth {
        req = req.insert_header(("Authorization", value));
    }
    req.to_request()
}

#[actix_web::test]
async fn identity_42_reaches_the_handler() {
    let hits = Hits::default();
    let app = guarded_app!(hits);

    let header = bearer_header(42, "user42@example.com", &test_security());
    let resp = test::call_service(&app, guarded_request(Some(&header))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 42);
    assert_eq!(body["email"], "user42@example.com");
    assert_eq!(hits.count(), 1);
}

#[actix_web::test]
async fn missing_header_is_rejected() {
    let hits = Hits::default();
    let app = guarded_app!(hits);

    let resp = test::call_service(&app, guarded_request(None)).await;
    let body = assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_HEADER",
        "authorization header is missing",
    )
    .await;

    assert!(body.error.is_none());
    assert_eq!(hits.count(), 0);
}

#[actix_web::test]
async fn header_without_bearer_prefix_reads_as_missing() {
    let hits = Hits::default();
    let app = guarded_app!(hits);
    let token = mint_test_token(1, "a@example.com", &test_security());

    for value in [token.clone(), format!("Basic {token}"), format!("bearer {token}")] {
        let resp = test::call_service(&app, guarded_request(Some(&value))).await;
        assert_error_response(
            resp,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED_MALFORMED_HEADER",
            "authorization header is missing",
        )
        .await;
    }
    assert_eq!(hits.count(), 0);
}

#[actix_web::test]
async fn bearer_with_empty_token_is_rejected() {
    let hits = Hits::default();
    let app = guarded_app!(hits);

    let resp = test::call_service(&app, guarded_request(Some("Bearer "))).await;
    assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_TOKEN",
        "token is missing",
    )
    .await;
    assert_eq!(hits.count(), 0);
}

#[actix_web::test]
async fn corrupted_signature_never_runs_the_handler() {
    let hits = Hits::default();
    let app = guarded_app!(hits);

    let token = corrupt_signature(&mint_test_token(42, "a@example.com", &test_security()));
    let resp = test::call_service(&app, guarded_request(Some(&format!("Bearer {token}")))).await;

    let body = assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_SIGNATURE_MISMATCH",
        "invalid token",
    )
    .await;
    assert_eq!(body.error.as_deref(), Some("signature mismatch"));
    assert_eq!(hits.count(), 0);
}

#[actix_web::test]
async fn token_signed_with_another_key_is_rejected() {
    let hits = Hits::default();
    let app = guarded_app!(hits);

    let other = photo_api::SecurityConfig::new("some-other-secret");
    let header = bearer_header(42, "a@example.com", &other);
    let resp = test::call_service(&app, guarded_request(Some(&header))).await;

    assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_SIGNATURE_MISMATCH",
        "invalid token",
    )
    .await;
    assert_eq!(hits.count(), 0);
}

#[actix_web::test]
async fn expired_token_is_rejected() {
    let hits = Hits::default();
    let app = guarded_app!(hits);

    let token = mint_expired_token(42, "a@example.com", &test_security());
    let resp = test::call_service(&app, guarded_request(Some(&format!("Bearer {token}")))).await;

    let body = assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_EXPIRED_JWT",
        "invalid token",
    )
    .await;
    assert_eq!(body.error.as_deref(), Some("token has expired"));
    assert_eq!(hits.count(), 0);
}

#[actix_web::test]
async fn alg_none_is_rejected() {
    let hits = Hits::default();
    let app = guarded_app!(hits);

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(br#"{"id":42,"email":"a@example.com"}"#);
    let forged = format!("Bearer {header}.{payload}.");
    let resp = test::call_service(&app, guarded_request(Some(&forged))).await;

    assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_UNSUPPORTED_ALGORITHM",
        "invalid token",
    )
    .await;
    assert_eq!(hits.count(), 0);
}

#[actix_web::test]
async fn garbage_token_is_rejected() {
    let hits = Hits::default();
    let app = guarded_app!(hits);

    let resp = test::call_service(&app, guarded_request(Some("Bearer not.a.jwt"))).await;
    assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_INVALID_JWT",
        "invalid token",
    )
    .await;
    assert_eq!(hits.count(), 0);
}

#[actix_web::test]
async fn signed_token_without_id_is_not_identity_zero() {
    let hits = Hits::default();
    let app = guarded_app!(hits);
    let sec = test_security();

    let cases = [
        ClaimSet::new().with_claim("email", "a@example.com"),
        ClaimSet::new()
            .with_claim("id", "42")
            .with_claim("email", "a@example.com"),
        ClaimSet::new()
            .with_claim("id", 4.2)
            .with_claim("email", "a@example.com"),
        ClaimSet::new()
            .with_claim("id", Value::Null)
            .with_claim("email", "a@example.com"),
    ];

    for claims in cases {
        let token = sign_claims(&claims, &sec);
        let resp =
            test::call_service(&app, guarded_request(Some(&format!("Bearer {token}")))).await;
        assert_error_response(
            resp,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED_INVALID_CLAIMS",
            "invalid token claims",
        )
        .await;
    }
    assert_eq!(hits.count(), 0);
}

#[actix_web::test]
async fn identity_does_not_leak_between_requests() {
    let hits = Hits::default();
    let app = guarded_app!(hits);
    let sec = test_security();

    let first = bearer_header(7, "seven@example.com", &sec);
    let resp = test::call_service(&app, guarded_request(Some(&first))).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 7);

    let resp = test::call_service(&app, guarded_request(None)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let second = bearer_header(8, "eight@example.com", &sec);
    let resp = test::call_service(&app, guarded_request(Some(&second))).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 8);

    assert_eq!(hits.count(), 2);
}

#[actix_web::test]
async fn rejection_never_echoes_secret_or_signature() {
    let hits = Hits::default();
    let app = guarded_app!(hits);

    let token = corrupt_signature(&mint_test_token(42, "a@example.com", &test_security()));
    let signature = token.rsplit('.').next().unwrap_or_default().to_string();
    let resp = test::call_service(&app, guarded_request(Some(&format!("Bearer {token}")))).await;

    let raw = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(!raw.contains(&signature));
    assert!(!raw.contains("test_secret_key"));
}
