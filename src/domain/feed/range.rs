// src/domain/feed/range.rs
use super::settings::FeedSettings;

/// Inclusive price window handed to the advert store.
///
/// `min > max` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Builds the window from raw `priceMin` / `priceMax` query values.
    ///
    /// Missing or unparseable values fall back to the configured bounds.
    /// A negative `priceMin` is raised to the floor. A `priceMax` of `0`
    /// means "no ceiling", while a negative one is kept and matches nothing.
    pub fn from_query(
        price_min: Option<&str>,
        price_max: Option<&str>,
        settings: &FeedSettings,
    ) -> Self {
        let min = parse_price(price_min)
            .filter(|value| *value >= 0)
            .unwrap_or(settings.min_price());
        let max = parse_price(price_max)
            .filter(|value| *value != 0)
            .unwrap_or(settings.max_price());
        Self { min, max }
    }

    pub fn contains(&self, price: i64) -> bool {
        self.min <= price && price <= self.max
    }
}

fn parse_price(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}
