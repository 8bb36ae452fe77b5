// tests/support/mocks/security.rs
use admarket_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use admarket_core::domain::user::{Login, UserId};
use async_trait::async_trait;
use chrono::Duration;

use super::time::fixed_now;

/// Tokens have the shape `token-<id>-<login>` so tests can mint them by hand.
pub fn token_for(id: i64, login: &str) -> String {
    format!("token-{id}-{login}")
}

pub const BOB_TOKEN: &str = "token-1-bob";
pub const ALICE_TOKEN: &str = "token-2-alice1";

/// パスワードをそのまま埋め込んだ「ハッシュ」を返すハッシャー
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = fixed_now();
        Ok(AuthTokenDto {
            token: token_for(subject.user_id.into(), subject.login.as_str()),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let invalid = || ApplicationError::unauthorized("invalid token");
        let rest = token.strip_prefix("token-").ok_or_else(invalid)?;
        let (id, login) = rest.split_once('-').ok_or_else(invalid)?;
        let id = id.parse::<i64>().map_err(|_| invalid())?;

        let issued_at = fixed_now();
        Ok(AuthenticatedUser {
            id: UserId::new(id).map_err(|_| invalid())?,
            login: Login::new(login).map_err(|_| invalid())?,
            issued_at,
            expires_at: issued_at + Duration::hours(1),
        })
    }
}
