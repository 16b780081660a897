use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::{CurrentUser, PhotoId, ValidatedJson};
use crate::repos::photos::{Photo, PhotoDraft};
use crate::services::photos as photo_service;
use crate::state::app_state::AppState;

/// Body of `POST /photos` and `PUT /photos/{photo_id}`.
#[derive(Debug, Deserialize)]
pub struct PhotoRequest {
    pub title: String,
    #[serde(default)]
    pub caption: String,
    pub photo_url: String,
}

impl From<PhotoRequest> for PhotoDraft {
    fn from(req: PhotoRequest) -> Self {
        Self {
            title: req.title,
            caption: req.caption,
            photo_url: req.photo_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub id: i32,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            title: photo.title,
            caption: photo.caption,
            photo_url: photo.photo_url,
            user_id: photo.user_id,
            created_at: photo.created_at,
            updated_at: photo.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn list_photos(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let photos = photo_service::list_photos(db, user.id).await?;
    let body: Vec<PhotoResponse> = photos.into_iter().map(PhotoResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn create_photo(
    user: CurrentUser,
    body: ValidatedJson<PhotoRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let photo = photo_service::create_photo(db, user.id, body.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(PhotoResponse::from(photo)))
}

async fn update_photo(
    user: CurrentUser,
    photo_id: PhotoId,
    body: ValidatedJson<PhotoRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    photo_service::update_photo(db, user.id, photo_id.0, body.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "photo updated successfully",
    }))
}

async fn delete_photo(
    user: CurrentUser,
    photo_id: PhotoId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    photo_service::delete_photo(db, user.id, photo_id.0).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "photo deleted successfully",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_photos))
        .route("", web::post().to(create_photo))
        .route("/{photo_id}", web::put().to(update_photo))
        .route("/{photo_id}", web::delete().to(delete_photo));
}
