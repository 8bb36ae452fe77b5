// src/presentation/http/controllers/users.rs
use crate::application::commands::users::{LoginUserCommand, RegisterUserCommand};
use crate::presentation::http::error::{HttpResult, IntoHttpResult, STATUS_OK};
use crate::presentation::http::extractors::{JsonBody, MaybeAuthorized};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub status: String,
    pub id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub login: String,
    pub id: i64,
    /// Value for the `Authorization-access` header.
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/user/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User created, or an error envelope.", body = RegisterResponse)
    ),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    MaybeAuthorized(actor): MaybeAuthorized,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> HttpResult<Json<RegisterResponse>> {
    let command = RegisterUserCommand {
        login: payload.login,
        password: payload.password,
    };

    let user = state
        .services
        .user_commands
        .register(actor.as_ref(), command)
        .await
        .into_http()?;

    Ok(Json(RegisterResponse {
        status: STATUS_OK.into(),
        id: user.id,
    }))
}

#[utoipa::path(
    post,
    path = "/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access token, or an error envelope.", body = LoginResponse)
    ),
    tag = "Users"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    MaybeAuthorized(actor): MaybeAuthorized,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        login: payload.login,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(actor.as_ref(), command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        status: STATUS_OK.into(),
        login: result.login,
        id: result.id,
        token: result.token.token,
    }))
}
