//! Photo repository functions. Every lookup is scoped to an owner.

use sea_orm::ConnectionTrait;

use crate::adapters::photos_sea as photos_adapter;
use crate::errors::domain::DomainError;

/// Photo domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: i32,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

/// Client-supplied photo fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDraft {
    pub title: String,
    pub caption: String,
    pub photo_url: String,
}

impl From<PhotoDraft> for photos_adapter::PhotoWrite {
    fn from(draft: PhotoDraft) -> Self {
        photos_adapter::PhotoWrite::new(draft.title, draft.photo_url).with_caption(draft.caption)
    }
}

pub async fn create_photo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    draft: PhotoDraft,
) -> Result<Photo, DomainError> {
    let photo = photos_adapter::create_photo(conn, owner_id, draft.into()).await?;
    Ok(Photo::from(photo))
}

pub async fn list_photos<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
) -> Result<Vec<Photo>, DomainError> {
    let photos = photos_adapter::list_photos_by_owner(conn, owner_id).await?;
    Ok(photos.into_iter().map(Photo::from).collect())
}

pub async fn update_photo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    photo_id: i32,
    owner_id: i32,
    draft: PhotoDraft,
) -> Result<Option<Photo>, DomainError> {
    let photo = photos_adapter::update_owned_photo(conn, photo_id, owner_id, draft.into()).await?;
    Ok(photo.map(Photo::from))
}

/// `true` when a row was removed.
pub async fn delete_photo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    photo_id: i32,
    owner_id: i32,
) -> Result<bool, DomainError> {
    let removed = photos_adapter::delete_owned_photo(conn, photo_id, owner_id).await?;
    Ok(removed > 0)
}

impl From<crate::entities::photos::Model> for Photo {
    fn from(model: crate::entities::photos::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            caption: model.caption,
            photo_url: model.photo_url,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
