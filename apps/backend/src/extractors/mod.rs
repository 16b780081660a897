pub mod current_user;
pub mod photo_id;
pub mod validated_json;

pub use current_user::CurrentUser;
pub use photo_id::PhotoId;
pub use validated_json::ValidatedJson;
