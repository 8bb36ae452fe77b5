use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, LoginResult, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, user::Login},
};

pub struct LoginUserCommand {
    pub login: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: LoginUserCommand,
    ) -> ApplicationResult<LoginResult> {
        Self::ensure_not_authorized(actor)?;

        let login = Login::new(command.login)
            .map_err(|_| ApplicationError::not_found("user not found"))?;

        let user = self
            .user_repo
            .find_by_login(&login)
            .await
            .map_err(|err: DomainError| {
                tracing::error!(error = %err, "error finding user");
                ApplicationError::infrastructure("error finding user")
            })?
            .ok_or_else(|| {
                tracing::info!(login = %login, "user not found");
                ApplicationError::not_found("user not found")
            })?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|err| {
                tracing::info!(error = %err, "invalid credentials");
                match err {
                    ApplicationError::Unauthorized(_) => {
                        ApplicationError::unauthorized("invalid credentials")
                    }
                    _ => ApplicationError::infrastructure("internal error"),
                }
            })?;

        let subject = TokenSubject {
            user_id: user.id,
            login: user.login.clone(),
        };
        let token = self.token_manager.issue(subject).await.map_err(|err| {
            tracing::error!(error = %err, "failed to generate token");
            ApplicationError::infrastructure("internal error")
        })?;

        tracing::info!(login = %user.login, "user logged in successfully");
        Ok(LoginResult {
            id: user.id.into(),
            login: user.login.into_inner(),
            token,
        })
    }
}
