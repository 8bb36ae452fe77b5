// src/domain/advert/entity.rs
use crate::domain::advert::value_objects::{AdvertBody, AdvertHeader, AdvertId, Price};
use crate::domain::user::Login;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advert {
    pub id: AdvertId,
    pub header: AdvertHeader,
    pub body: AdvertBody,
    pub image_url: Option<String>,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub author: Login,
}

impl Advert {
    pub fn is_authored_by(&self, login: &Login) -> bool {
        &self.author == login
    }
}

#[derive(Debug, Clone)]
pub struct NewAdvert {
    pub header: AdvertHeader,
    pub body: AdvertBody,
    pub image_url: Option<String>,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub author: Login,
}
