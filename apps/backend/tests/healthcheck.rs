mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use photo_api::state::app_state::AppState;
use support::{build_test_state, create_test_app, test_security};

#[actix_web::test]
async fn health_with_database() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-trace-id header");
    assert!(uuid::Uuid::parse_str(&trace_id).is_ok());
    assert_eq!(test::read_body(resp).await, "ok");
}

#[actix_web::test]
async fn health_without_database() {
    let app = create_test_app(AppState::new_without_db(test_security()))
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn trace_ids_differ_between_requests() {
    let app = create_test_app(AppState::new_without_db(test_security()))
        .with_prod_routes()
        .build()
        .await;

    let mut seen = Vec::new();
    for _ in 0..2 {
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        seen.push(resp.headers().get("x-trace-id").cloned().expect("x-trace-id"));
    }
    assert_ne!(seen[0], seen[1]);
}
