use crate::domain::advert::Advert;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Acknowledgement returned after an advert is stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedAdvertDto {
    pub id: i64,
    /// Login of the author.
    pub author_id: String,
    #[serde(with = "serde_time")]
    pub date: DateTime<Utc>,
}

impl From<Advert> for CreatedAdvertDto {
    fn from(advert: Advert) -> Self {
        Self {
            id: advert.id.into(),
            author_id: advert.author.into_inner(),
            date: advert.created_at,
        }
    }
}
