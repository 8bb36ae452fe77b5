// src/domain/feed/settings.rs
use crate::domain::advert::value_objects::{MAX_PRICE, MIN_PRICE};
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Read-only knobs of the feed pipeline, shared by every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    page_size: usize,
    min_price: i64,
    max_price: i64,
}

impl FeedSettings {
    pub fn new(page_size: usize, min_price: i64, max_price: i64) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        if min_price < 0 || max_price < min_price {
            return Err(DomainError::Validation(format!(
                "invalid price bounds [{min_price}, {max_price}]"
            )));
        }
        Ok(Self {
            page_size,
            min_price,
            max_price,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Lower bound used when `priceMin` is missing or unusable.
    pub fn min_price(&self) -> i64 {
        self.min_price
    }

    /// Ceiling used when `priceMax` is missing, unusable or zero.
    pub fn max_price(&self) -> i64 {
        self.max_price
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            min_price: MIN_PRICE,
            max_price: MAX_PRICE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_marketplace_constants() {
        let settings = FeedSettings::default();
        assert_eq!(settings.page_size(), 10);
        assert_eq!(settings.min_price(), 0);
        assert_eq!(settings.max_price(), 100_000_000_000);
    }

    #[test]
    fn rejects_zero_page_size_and_inverted_bounds() {
        assert!(FeedSettings::new(0, 0, 10).is_err());
        assert!(FeedSettings::new(5, 10, 1).is_err());
        assert!(FeedSettings::new(5, 0, 1_000).is_ok());
    }
}
