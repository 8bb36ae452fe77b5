// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const LOGIN_MIN_LEN: usize = 5;
pub const LOGIN_MAX_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Public handle of a user. Also used as the author reference of an advert.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    /// Accepts any non-empty login, as found in storage or in a token.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("login is required".into()));
        }
        Ok(Self(value))
    }

    /// Applies the sign-up rules and reports every broken one at once, joined with `", "`.
    pub fn for_registration(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let violations = Self::violations(&value);
        if violations.is_empty() {
            Ok(Self(value))
        } else {
            Err(DomainError::Validation(violations.join(", ")))
        }
    }

    pub fn violations(value: &str) -> Vec<&'static str> {
        if value.is_empty() {
            return vec!["login is required"];
        }

        let mut violations = Vec::new();
        let len = value.chars().count();
        if len < LOGIN_MIN_LEN {
            violations.push("login is too short");
        }
        if len > LOGIN_MAX_LEN {
            violations.push("login is too long");
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            violations.push("login should contain only alphanumeric characters");
        }
        violations
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<Login> for String {
    fn from(value: Login) -> Self {
        value.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}
