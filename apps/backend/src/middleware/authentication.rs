//! Authentication gate.
//!
//! Wraps protected scopes. Each request must carry `Authorization: Bearer <token>`;
//! the token is verified and the caller's identity is stored in request
//! extensions as a [`CurrentUser`]. Anything else is answered with a 401 and
//! the wrapped service is never called.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::logging::security;
use crate::state::app_state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticationMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        // Runs inside the request's trace scope so rejections carry its trace id.
        Box::pin(async move {
            match authenticate(&req) {
                Ok(user) => {
                    debug!(user_id = %user.id, "request authenticated");
                    req.extensions_mut().insert(user);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(err) => {
                    security::auth_rejected(err.code(), err.reason(), req.path());
                    Ok(req.error_response(err).map_into_right_body())
                }
            }
        })
    }
}

/// Walk the gate's checks in order; the first failure decides the response.
fn authenticate(req: &ServiceRequest) -> Result<CurrentUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    let token = bearer_token(req.headers().get(header::AUTHORIZATION))?;

    let claims = verify_token(token, &state.security)
        .map_err(|e| AppError::unauthorized_invalid_token(&e))?;

    let id = claims
        .user_id()
        .map_err(|e| AppError::unauthorized_invalid_claims(&e))?;

    Ok(CurrentUser {
        id,
        email: claims.email().ok().map(str::to_string),
    })
}

/// The credential after `Bearer `.
fn bearer_token(value: Option<&header::HeaderValue>) -> Result<&str, AppError> {
    let value = value.ok_or_else(AppError::unauthorized_missing_header)?;
    let value = value
        .to_str()
        .map_err(|_| AppError::unauthorized_malformed_header())?;

    // Some clients and proxies trim the trailing space off a bare "Bearer ".
    if value.trim_end() == BEARER_PREFIX.trim_end() {
        return Err(AppError::unauthorized_missing_token());
    }

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(AppError::unauthorized_malformed_header)?
        .trim();

    if token.is_empty() {
        return Err(AppError::unauthorized_missing_token());
    }
    Ok(token)
}
