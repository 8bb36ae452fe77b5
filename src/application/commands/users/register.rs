use super::{UserCommandService, password::password_violations};
use crate::{
    application::{
        dto::{AuthenticatedUser, RegisteredUserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Login, NewUser, PasswordHash},
    },
};

pub struct RegisterUserCommand {
    pub login: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<RegisteredUserDto> {
        Self::ensure_not_authorized(actor)?;

        let login = Self::validate_credentials(command.login, &command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await.map_err(|err| {
            tracing::error!(error = %err, "failed to generate password hash");
            ApplicationError::infrastructure("internal error")
        })?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(login, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await.map_err(|err| match err {
            DomainError::Conflict(_) => ApplicationError::conflict("user already exists"),
            other => {
                tracing::error!(error = %other, "error creating user");
                ApplicationError::infrastructure("error creating user")
            }
        })?;

        tracing::info!(id = i64::from(user.id), login = %user.login, "user added");
        Ok(user.into())
    }

    /// Collects password problems first, then login problems, into one message.
    fn validate_credentials(login: String, password: &str) -> ApplicationResult<Login> {
        let mut violations = password_violations(password);

        let login = match Login::for_registration(login) {
            Ok(login) => Some(login),
            Err(DomainError::Validation(msg)) => {
                violations.push(msg);
                None
            }
            Err(other) => return Err(other.into()),
        };

        match login {
            Some(login) if violations.is_empty() => Ok(login),
            _ => Err(ApplicationError::validation(violations.join(", "))),
        }
    }
}
