// src/application/dto/feed.rs
use crate::domain::{advert::Advert, feed::ViewerContext};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Client-facing view of an advert, computed per viewer and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedItemDto {
    pub header: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: i64,
    pub author: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_author: bool,
}

impl FeedItemDto {
    pub fn project(advert: &Advert, viewer: &ViewerContext) -> Self {
        Self {
            header: advert.header.as_str().to_owned(),
            body: advert.body.as_str().to_owned(),
            image_url: advert.image_url.clone().filter(|url| !url.is_empty()),
            price: advert.price.value(),
            author: advert.author.as_str().to_owned(),
            is_author: viewer.is_author_of(advert),
        }
    }

    /// Projects a page in order.
    pub fn project_page(adverts: &[Advert], viewer: &ViewerContext) -> Vec<Self> {
        adverts
            .iter()
            .map(|advert| Self::project(advert, viewer))
            .collect()
    }
}

/// Result of assembling one feed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOutcome {
    Page(Vec<FeedItemDto>),
    /// The requested page lies past the end of the filtered collection.
    NothingFound { page: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feed::fixtures::advert;
    use crate::domain::user::Login;
    use serde_json::json;

    #[test]
    fn copies_fields_verbatim() {
        let mut source = advert(3, 4200, 10, "carol");
        source.image_url = Some("https://img.example/cat.png".into());

        let item = FeedItemDto::project(&source, &ViewerContext::Anonymous);

        assert_eq!(item.header, source.header.as_str());
        assert_eq!(item.body, source.body.as_str());
        assert_eq!(item.image_url.as_deref(), Some("https://img.example/cat.png"));
        assert_eq!(item.price, 4200);
        assert_eq!(item.author, "carol");
        assert!(!item.is_author);
    }

    #[test]
    fn marks_only_the_viewers_adverts() {
        let adverts = vec![advert(1, 10, 0, "bob"), advert(2, 20, 0, "carol")];
        let viewer = ViewerContext::authenticated(Login::new("bob").unwrap());

        let items = FeedItemDto::project_page(&adverts, &viewer);

        assert_eq!(
            items.iter().map(|i| i.is_author).collect::<Vec<_>>(),
            vec![true, false]
        );
        assert_eq!(items[0].header, "advert 1");
        assert_eq!(items[1].header, "advert 2");
    }

    #[test]
    fn omits_false_flag_and_missing_image() {
        let item = FeedItemDto::project(&advert(1, 10, 0, "bob"), &ViewerContext::Anonymous);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "header": "advert 1",
                "body": "body of 1",
                "price": 10,
                "author": "bob"
            })
        );
    }

    #[test]
    fn serializes_owner_flag_when_true() {
        let viewer = ViewerContext::authenticated(Login::new("bob").unwrap());
        let item = FeedItemDto::project(&advert(1, 10, 0, "bob"), &viewer);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["is_author"], json!(true));
    }
}
