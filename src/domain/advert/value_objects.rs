// src/domain/advert/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const HEADER_MAX_LEN: usize = 100;
pub const BODY_MAX_LEN: usize = 600;
pub const MIN_PRICE: i64 = 0;
pub const MAX_PRICE: i64 = 100_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvertId(pub i64);

impl AdvertId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("advert id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AdvertId> for i64 {
    fn from(value: AdvertId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertHeader(String);

impl AdvertHeader {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("header is required".into()));
        }
        if value.chars().count() > HEADER_MAX_LEN {
            return Err(DomainError::Validation("advert header is too long".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AdvertHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free text of an advert. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdvertBody(String);

impl AdvertBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > BODY_MAX_LEN {
            return Err(DomainError::Validation("advert body is too long".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value > MAX_PRICE {
            return Err(DomainError::Validation("price is too big".into()));
        }
        if value < MIN_PRICE {
            return Err(DomainError::Validation("price is too small".into()));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        value.0
    }
}
