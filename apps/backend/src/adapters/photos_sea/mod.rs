//! SeaORM adapter for the photos table.
//!
//! Mutations are scoped by owner: a row belonging to someone else is
//! indistinguishable from a missing one.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::photos;

pub mod dto;

pub use dto::PhotoWrite;

pub async fn create_photo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    dto: PhotoWrite,
) -> Result<photos::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let photo_active = photos::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        caption: Set(dto.caption),
        photo_url: Set(dto.photo_url),
        user_id: Set(owner_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    photo_active.insert(conn).await
}

pub async fn list_photos_by_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
) -> Result<Vec<photos::Model>, sea_orm::DbErr> {
    photos::Entity::find()
        .filter(photos::Column::UserId.eq(owner_id))
        .order_by_asc(photos::Column::Id)
        .all(conn)
        .await
}

pub async fn find_owned_photo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    photo_id: i32,
    owner_id: i32,
) -> Result<Option<photos::Model>, sea_orm::DbErr> {
    photos::Entity::find_by_id(photo_id)
        .filter(photos::Column::UserId.eq(owner_id))
        .one(conn)
        .await
}

/// Returns `None` when no photo with this id belongs to `owner_id`.
pub async fn update_owned_photo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    photo_id: i32,
    owner_id: i32,
    dto: PhotoWrite,
) -> Result<Option<photos::Model>, sea_orm::DbErr> {
    let Some(existing) = find_owned_photo(conn, photo_id, owner_id).await? else {
        return Ok(None);
    };

    let mut photo_active: photos::ActiveModel = existing.into();
    photo_active.title = Set(dto.title);
    photo_active.caption = Set(dto.caption);
    photo_active.photo_url = Set(dto.photo_url);
    photo_active.updated_at = Set(time::OffsetDateTime::now_utc());

    photo_active.update(conn).await.map(Some)
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_owned_photo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    photo_id: i32,
    owner_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = photos::Entity::delete_many()
        .filter(photos::Column::Id.eq(photo_id))
        .filter(photos::Column::UserId.eq(owner_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
