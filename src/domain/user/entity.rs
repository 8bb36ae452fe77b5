// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Login, PasswordHash, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub login: Login,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: Login,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(login: Login, password_hash: PasswordHash, created_at: DateTime<Utc>) -> Self {
        Self {
            login,
            password_hash,
            created_at,
        }
    }
}
