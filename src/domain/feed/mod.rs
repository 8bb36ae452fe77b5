//! Feed pipeline rules: price window, ordering, paging and viewer identity.
//!
//! Everything here is pure and operates on adverts already fetched for a
//! single request.

pub mod error;
pub mod page;
pub mod query;
pub mod range;
pub mod settings;
pub mod sort;
pub mod viewer;

pub use error::FeedError;
pub use page::PageNumber;
pub use query::PageQuery;
pub use range::PriceRange;
pub use settings::FeedSettings;
pub use sort::SortOrder;
pub use viewer::ViewerContext;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::advert::{Advert, AdvertBody, AdvertHeader, AdvertId, Price};
    use crate::domain::user::Login;
    use chrono::{DateTime, Utc};

    pub(crate) fn advert(id: i64, price: i64, created_secs: i64, author: &str) -> Advert {
        Advert {
            id: AdvertId::new(id).unwrap(),
            header: AdvertHeader::new(format!("advert {id}")).unwrap(),
            body: AdvertBody::new(format!("body of {id}")).unwrap(),
            image_url: None,
            price: Price::new(price).unwrap(),
            created_at: DateTime::<Utc>::from_timestamp(created_secs, 0).unwrap(),
            author: Login::new(author).unwrap(),
        }
    }
}
