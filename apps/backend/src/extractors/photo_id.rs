use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// `{photo_id}` path segment parsed as a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoId(pub i32);

fn invalid_photo_id() -> AppError {
    AppError::bad_request(ErrorCode::InvalidPhotoId, "invalid photo ID")
}

impl FromRequest for PhotoId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("photo_id")
            .and_then(|raw| raw.parse::<i32>().ok())
            .filter(|id| *id > 0)
            .map(PhotoId)
            .ok_or_else(invalid_photo_id);
        ready(parsed)
    }
}
