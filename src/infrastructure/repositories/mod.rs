// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_advert;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_advert::{SqliteAdvertReadRepository, SqliteAdvertWriteRepository};
pub use sqlite_user::SqliteUserRepository;
