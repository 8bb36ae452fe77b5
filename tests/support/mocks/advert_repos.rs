// tests/support/mocks/advert_repos.rs
use admarket_core::domain::advert::{
    Advert, AdvertId, AdvertReadRepository, AdvertWriteRepository, NewAdvert,
};
use admarket_core::domain::errors::{DomainError, DomainResult};
use admarket_core::domain::feed::PriceRange;
use async_trait::async_trait;
use std::sync::Mutex;

/// 読み書き両方を実装するメモリ上の広告ストア（挿入順を保持）
#[derive(Default)]
pub struct InMemoryAdvertRepo {
    adverts: Mutex<Vec<Advert>>,
}

impl InMemoryAdvertRepo {
    pub fn with(adverts: Vec<Advert>) -> Self {
        Self {
            adverts: Mutex::new(adverts),
        }
    }

    pub fn all(&self) -> Vec<Advert> {
        self.adverts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdvertWriteRepository for InMemoryAdvertRepo {
    async fn insert(&self, advert: NewAdvert) -> DomainResult<Advert> {
        let mut adverts = self.adverts.lock().unwrap();
        let stored = Advert {
            id: AdvertId::new(adverts.len() as i64 + 1)?,
            header: advert.header,
            body: advert.body,
            image_url: advert.image_url,
            price: advert.price,
            created_at: advert.created_at,
            author: advert.author,
        };
        adverts.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl AdvertReadRepository for InMemoryAdvertRepo {
    async fn list_in_price_range(&self, range: PriceRange) -> DomainResult<Vec<Advert>> {
        let adverts = self.adverts.lock().unwrap();
        Ok(adverts
            .iter()
            .filter(|advert| range.contains(advert.price.value()))
            .cloned()
            .collect())
    }
}

/// すべての操作がストレージエラーになるリポジトリ
pub struct FailingAdvertRepo;

#[async_trait]
impl AdvertWriteRepository for FailingAdvertRepo {
    async fn insert(&self, _advert: NewAdvert) -> DomainResult<Advert> {
        Err(DomainError::Persistence("disk I/O error".into()))
    }
}

#[async_trait]
impl AdvertReadRepository for FailingAdvertRepo {
    async fn list_in_price_range(&self, _range: PriceRange) -> DomainResult<Vec<Advert>> {
        Err(DomainError::Persistence("disk I/O error".into()))
    }
}
