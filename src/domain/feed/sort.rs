// src/domain/feed/sort.rs
use super::error::FeedError;
use crate::domain::advert::Advert;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    PriceUp,
    PriceDown,
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    /// Resolves the `sort` query value. Missing or empty means newest first.
    pub fn from_token(token: Option<&str>) -> Result<Self, FeedError> {
        match token {
            None | Some("") => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PriceUp => "priceUp",
            SortOrder::PriceDown => "priceDown",
            SortOrder::Newest => "new",
            SortOrder::Oldest => "old",
        }
    }

    /// Stable in-place sort: adverts comparing equal keep their relative order.
    pub fn apply(self, adverts: &mut [Advert]) {
        match self {
            SortOrder::PriceUp => adverts.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceDown => adverts.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Newest => adverts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => adverts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priceUp" => Ok(SortOrder::PriceUp),
            "priceDown" => Ok(SortOrder::PriceDown),
            "new" => Ok(SortOrder::Newest),
            "old" => Ok(SortOrder::Oldest),
            other => Err(FeedError::InvalidSortToken(other.to_string())),
        }
    }
}
