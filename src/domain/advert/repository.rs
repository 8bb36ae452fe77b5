use crate::domain::advert::entity::{Advert, NewAdvert};
use crate::domain::errors::DomainResult;
use crate::domain::feed::PriceRange;
use async_trait::async_trait;

#[async_trait]
pub trait AdvertWriteRepository: Send + Sync {
    async fn insert(&self, advert: NewAdvert) -> DomainResult<Advert>;
}

#[async_trait]
pub trait AdvertReadRepository: Send + Sync {
    /// Adverts whose price lies in `range` (both ends inclusive), in insertion order.
    async fn list_in_price_range(&self, range: PriceRange) -> DomainResult<Vec<Advert>>;
}
