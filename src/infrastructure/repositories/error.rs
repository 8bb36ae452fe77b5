use crate::domain::errors::DomainError;

const CNT_USER_LOGIN: &str = "users_login_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                let target = db_err.constraint().unwrap_or(CNT_USER_LOGIN);
                return if target == CNT_USER_LOGIN || db_err.message().contains("users.login") {
                    DomainError::Conflict("user already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("author not found".into());
            }

            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
