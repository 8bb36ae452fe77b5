// src/presentation/http/controllers/adverts.rs
use crate::application::commands::adverts::CreateAdvertCommand;
use crate::presentation::http::error::{HttpResult, IntoHttpResult, STATUS_OK};
use crate::presentation::http::extractors::{Authorized, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAdvertRequest {
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Zero or absent counts as missing.
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAdvertResponse {
    pub status: String,
    pub id: i64,
    /// Login of the author.
    pub author_id: String,
    pub date: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/advert",
    request_body = CreateAdvertRequest,
    responses(
        (status = 200, description = "Advert stored, or an error envelope.", body = CreateAdvertResponse)
    ),
    security(("authorizationAccess" = [])),
    tag = "Adverts"
)]
pub async fn create_advert(
    Extension(state): Extension<HttpState>,
    Authorized(user): Authorized,
    JsonBody(payload): JsonBody<CreateAdvertRequest>,
) -> HttpResult<Json<CreateAdvertResponse>> {
    let command = CreateAdvertCommand {
        header: payload.header,
        body: payload.body,
        price: payload.price,
        image_url: payload.image_url,
    };

    let created = state
        .services
        .advert_commands
        .create_advert(&user, command)
        .await
        .into_http()?;

    Ok(Json(CreateAdvertResponse {
        status: STATUS_OK.into(),
        id: created.id,
        author_id: created.author_id,
        date: created.date,
    }))
}
