// src/domain/feed/query.rs
use super::{
    error::FeedError, page::PageNumber, range::PriceRange, settings::FeedSettings,
    sort::SortOrder,
};

/// Normalized feed request. Built once per request and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub range: PriceRange,
    pub sort: SortOrder,
    pub page: PageNumber,
}

impl PageQuery {
    /// Only an unknown sort token is an error; every other value falls back to a default.
    pub fn from_params(
        price_min: Option<&str>,
        price_max: Option<&str>,
        sort: Option<&str>,
        page: Option<&str>,
        settings: &FeedSettings,
    ) -> Result<Self, FeedError> {
        Ok(Self {
            range: PriceRange::from_query(price_min, price_max, settings),
            sort: SortOrder::from_token(sort)?,
            page: PageNumber::from_query(page),
        })
    }
}
