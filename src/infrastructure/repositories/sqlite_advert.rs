// src/infrastructure/repositories/sqlite_advert.rs
use super::map_sqlx;
use crate::domain::advert::{
    Advert, AdvertBody, AdvertHeader, AdvertId, AdvertReadRepository, AdvertWriteRepository,
    NewAdvert, Price,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::feed::PriceRange;
use crate::domain::user::Login;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ADVERT_COLUMNS: &str = "id, header, body, image_url, price, created_at, author_login";

#[derive(Clone)]
pub struct SqliteAdvertWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAdvertWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteAdvertReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAdvertReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdvertRow {
    id: i64,
    header: String,
    body: String,
    image_url: Option<String>,
    price: i64,
    created_at: DateTime<Utc>,
    author_login: String,
}

impl TryFrom<AdvertRow> for Advert {
    type Error = DomainError;

    fn try_from(row: AdvertRow) -> Result<Self, Self::Error> {
        Ok(Advert {
            id: AdvertId::new(row.id)?,
            header: AdvertHeader::new(row.header)?,
            body: AdvertBody::new(row.body)?,
            image_url: row.image_url.filter(|url| !url.is_empty()),
            price: Price::new(row.price)?,
            created_at: row.created_at,
            author: Login::new(row.author_login)?,
        })
    }
}

#[async_trait]
impl AdvertWriteRepository for SqliteAdvertWriteRepository {
    async fn insert(&self, advert: NewAdvert) -> DomainResult<Advert> {
        let NewAdvert {
            header,
            body,
            image_url,
            price,
            created_at,
            author,
        } = advert;

        let sql = format!(
            "INSERT INTO adverts (header, body, image_url, price, created_at, author_login)
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {ADVERT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AdvertRow>(&sql)
            .bind(header.as_str())
            .bind(body.as_str())
            .bind(image_url.as_deref())
            .bind(price.value())
            .bind(created_at)
            .bind(author.as_str())
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Advert::try_from(row)
    }
}

#[async_trait]
impl AdvertReadRepository for SqliteAdvertReadRepository {
    async fn list_in_price_range(&self, range: PriceRange) -> DomainResult<Vec<Advert>> {
        let sql = format!(
            "SELECT {ADVERT_COLUMNS} FROM adverts WHERE price >= ? AND price <= ? ORDER BY id"
        );
        let rows = sqlx::query_as::<_, AdvertRow>(&sql)
            .bind(range.min)
            .bind(range.max)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Advert::try_from).collect()
    }
}
