// src/application/queries/feed/show.rs
use super::FeedQueryService;
use crate::{
    application::{
        dto::{FeedItemDto, FeedOutcome},
        error::{ApplicationError, ApplicationResult},
    },
    domain::feed::{FeedError, PageQuery},
};

/// Raw feed request as received from the client.
#[derive(Debug, Clone, Default)]
pub struct ShowFeedQuery {
    pub access_token: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl FeedQueryService {
    /// Fetches, orders, pages and projects the feed for one request.
    ///
    /// A page past the end is reported as [`FeedOutcome::NothingFound`];
    /// an unknown sort token or a storage failure is an error.
    pub async fn show_feed(&self, query: ShowFeedQuery) -> ApplicationResult<FeedOutcome> {
        let viewer = self.resolve_viewer(query.access_token.as_deref()).await;

        let page_query = PageQuery::from_params(
            query.price_min.as_deref(),
            query.price_max.as_deref(),
            query.sort.as_deref(),
            query.page.as_deref(),
            &self.settings,
        )
        .inspect_err(|err| tracing::error!(error = %err, "invalid feed query"))?;

        let mut adverts = self
            .read_repo
            .list_in_price_range(page_query.range)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to get adverts");
                ApplicationError::from(err)
            })?;

        page_query.sort.apply(&mut adverts);

        let page = match page_query.page.slice(&adverts, self.settings.page_size()) {
            Ok(page) => page,
            Err(FeedError::PageOutOfRange { page }) => {
                tracing::info!(page, total = adverts.len(), "no adverts found");
                return Ok(FeedOutcome::NothingFound { page });
            }
            Err(other) => return Err(other.into()),
        };

        tracing::info!(
            page = page_query.page.get(),
            sort = %page_query.sort,
            count = page.len(),
            "adverts accessed"
        );
        Ok(FeedOutcome::Page(FeedItemDto::project_page(page, &viewer)))
    }
}
