use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::Login,
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the login is already taken.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_login(&self, login: &Login) -> DomainResult<Option<User>>;
}
