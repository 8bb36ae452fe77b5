// src/presentation/http/controllers/feed.rs
use crate::application::{
    dto::{FeedItemDto, FeedOutcome},
    queries::feed::ShowFeedQuery,
};
use crate::presentation::http::error::{
    HttpError, HttpResult, IntoHttpResult, MSG_NOTHING_FOUND, STATUS_OK,
};
use crate::presentation::http::extractors::AccessToken;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Query, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Raw feed query. Values are kept as text; lenient parsing happens downstream.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedParams {
    /// Lower price bound, inclusive. Defaults to 0.
    #[serde(rename = "priceMin")]
    pub price_min: Option<String>,
    /// Upper price bound, inclusive. `0` or absent means no upper bound.
    #[serde(rename = "priceMax")]
    pub price_max: Option<String>,
    /// One of `priceUp`, `priceDown`, `new`, `old`. Defaults to `new`.
    pub sort: Option<String>,
    /// 1-based page number. Defaults to 1.
    pub page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedResponse {
    pub status: String,
    pub adverts: Vec<FeedItemDto>,
}

#[utoipa::path(
    get,
    path = "/feed",
    params(FeedParams),
    responses(
        (status = 200, description = "One feed page, or an error envelope such as \"nothing found\".", body = FeedResponse)
    ),
    security((), ("authorizationAccess" = [])),
    tag = "Feed"
)]
pub async fn show_feed(
    Extension(state): Extension<HttpState>,
    AccessToken(access_token): AccessToken,
    params: Result<Query<FeedParams>, QueryRejection>,
) -> HttpResult<Json<FeedResponse>> {
    let params = params.map(|Query(params)| params).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "unreadable feed query, using defaults");
        FeedParams::default()
    });

    let query = ShowFeedQuery {
        access_token,
        price_min: params.price_min,
        price_max: params.price_max,
        sort: params.sort,
        page: params.page,
    };

    match state.services.feed_queries.show_feed(query).await.into_http()? {
        FeedOutcome::Page(adverts) => Ok(Json(FeedResponse {
            status: STATUS_OK.into(),
            adverts,
        })),
        FeedOutcome::NothingFound { page } => {
            tracing::info!(page, "nothing found");
            Err(HttpError::message(MSG_NOTHING_FOUND))
        }
    }
}
