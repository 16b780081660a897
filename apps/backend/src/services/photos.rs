use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::claims::UserId;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::repos::photos::{self, Photo, PhotoDraft};

fn photo_not_found() -> AppError {
    DomainError::not_found(NotFoundKind::Photo, "photo not found").into()
}

fn validate_draft(draft: &PhotoDraft) -> Result<(), AppError> {
    if draft.title.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "title is required",
        ));
    }
    if draft.photo_url.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "photo_url is required",
        ));
    }
    Ok(())
}

pub async fn list_photos(
    conn: &(impl ConnectionTrait + Send + Sync),
    owner: UserId,
) -> Result<Vec<Photo>, AppError> {
    Ok(photos::list_photos(conn, owner.0).await?)
}

pub async fn create_photo(
    conn: &(impl ConnectionTrait + Send + Sync),
    owner: UserId,
    draft: PhotoDraft,
) -> Result<Photo, AppError> {
    validate_draft(&draft)?;
    let photo = photos::create_photo(conn, owner.0, draft).await?;
    info!(photo_id = photo.id, user_id = owner.0, "photo created");
    Ok(photo)
}

/// A photo owned by someone else is reported as not found.
pub async fn update_photo(
    conn: &(impl ConnectionTrait + Send + Sync),
    owner: UserId,
    photo_id: i32,
    draft: PhotoDraft,
) -> Result<Photo, AppError> {
    validate_draft(&draft)?;
    let photo = photos::update_photo(conn, photo_id, owner.0, draft)
        .await?
        .ok_or_else(photo_not_found)?;
    info!(photo_id, user_id = owner.0, "photo updated");
    Ok(photo)
}

pub async fn delete_photo(
    conn: &(impl ConnectionTrait + Send + Sync),
    owner: UserId,
    photo_id: i32,
) -> Result<(), AppError> {
    if !photos::delete_photo(conn, photo_id, owner.0).await? {
        return Err(photo_not_found());
    }
    info!(photo_id, user_id = owner.0, "photo deleted");
    Ok(())
}
