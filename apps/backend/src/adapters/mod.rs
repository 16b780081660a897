//! SeaORM adapters. Functions here return `sea_orm::DbErr`; the repos layer
//! maps that to `DomainError`.

pub mod photos_sea;
pub mod users_sea;
