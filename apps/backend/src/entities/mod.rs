pub mod photos;
pub mod users;

pub use photos::Entity as Photos;
pub use photos::Model as Photo;
pub use users::Entity as Users;
pub use users::Model as User;
