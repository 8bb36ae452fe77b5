use std::sync::Arc;

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    /// Sign-up and sign-in are only offered to requests without a valid token.
    pub(super) fn ensure_not_authorized(
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<()> {
        match actor {
            Some(user) => {
                tracing::info!(login = %user.login, "user already authorized");
                Err(ApplicationError::conflict("user already authorized"))
            }
            None => Ok(()),
        }
    }
}
