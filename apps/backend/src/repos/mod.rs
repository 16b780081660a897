//! Repository functions for the domain layer (generic over `ConnectionTrait`).

pub mod photos;
pub mod users;
