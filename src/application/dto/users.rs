use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AuthTokenDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisteredUserDto {
    pub id: i64,
}

impl From<User> for RegisteredUserDto {
    fn from(user: User) -> Self {
        Self { id: user.id.into() }
    }
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub id: i64,
    pub login: String,
    pub token: AuthTokenDto,
}
