// tests/support/builders.rs
use admarket_core::domain::advert::{Advert, AdvertBody, AdvertHeader, AdvertId, Price};
use admarket_core::domain::user::Login;
use chrono::{DateTime, Duration, Utc};

use super::mocks::fixed_now;

pub struct AdvertBuilder {
    id: i64,
    header: String,
    body: String,
    image_url: Option<String>,
    price: i64,
    created_at: DateTime<Utc>,
    author: String,
}

impl AdvertBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            header: format!("Advert {id}"),
            body: "Test body".into(),
            image_url: None,
            price: 100,
            created_at: fixed_now() + Duration::seconds(id),
            author: "bob".into(),
        }
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> Advert {
        Advert {
            id: AdvertId::new(self.id).unwrap(),
            header: AdvertHeader::new(self.header).unwrap(),
            body: AdvertBody::new(self.body).unwrap(),
            image_url: self.image_url,
            price: Price::new(self.price).unwrap(),
            created_at: self.created_at,
            author: Login::new(self.author).unwrap(),
        }
    }
}
