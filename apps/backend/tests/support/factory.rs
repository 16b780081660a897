//! Database fixtures.

use photo_api::repos::photos::{self, Photo, PhotoDraft};
use photo_api::repos::users::{self, User};
use photo_api::MIN_BCRYPT_COST;
use sea_orm::DatabaseConnection;

pub const DEFAULT_PASSWORD: &str = "password123";

/// Insert a user whose password is [`DEFAULT_PASSWORD`].
pub async fn create_user(db: &DatabaseConnection, username: &str, email: &str) -> User {
    let hash = bcrypt::hash(DEFAULT_PASSWORD, MIN_BCRYPT_COST).expect("hash password");
    users::create_user(db, username, email, &hash, 25)
        .await
        .expect("insert user")
}

pub async fn create_photo(db: &DatabaseConnection, owner_id: i32, title: &str) -> Photo {
    photos::create_photo(
        db,
        owner_id,
        PhotoDraft {
            title: title.to_string(),
            caption: format!("{title} caption"),
            photo_url: format!("https://img.example.com/{title}.jpg"),
        },
    )
    .await
    .expect("insert photo")
}
