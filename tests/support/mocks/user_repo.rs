// tests/support/mocks/user_repo.rs
use admarket_core::domain::errors::{DomainError, DomainResult};
use admarket_core::domain::user::{Login, NewUser, User, UserId, UserRepository};
use async_trait::async_trait;
use std::sync::Mutex;

/// メモリ上のユーザーリポジトリ（ログイン名の一意性のみ保証）
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    pub fail_inserts: bool,
}

impl InMemoryUserRepo {
    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        if self.fail_inserts {
            return Err(DomainError::Persistence("database is locked".into()));
        }
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.login == new_user.login) {
            return Err(DomainError::Conflict("user already exists".into()));
        }
        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            login: new_user.login,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_login(&self, login: &Login) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| &user.login == login).cloned())
    }
}
