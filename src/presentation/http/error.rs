// src/presentation/http/error.rs
//! Every response is HTTP 200; success and failure are told apart by the
//! `status` field of the JSON envelope.
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::{errors::DomainError, feed::FeedError};
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ERROR: &str = "Error";

pub const MSG_INTERNAL: &str = "internal error";
pub const MSG_DECODE_BODY: &str = "failed to decode request body";
pub const MSG_AUTHORIZATION_FAILED: &str = "authorization failed";
pub const MSG_NOTHING_FOUND: &str = "nothing found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusEnvelope {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusEnvelope {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.into(),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.into(),
            error: Some(message.into()),
        }
    }
}

#[derive(Debug)]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn from_error(err: ApplicationError) -> Self {
        if err.is_internal() {
            tracing::error!(error = %err, "request failed");
        } else {
            tracing::debug!(error = %err, "request rejected");
        }

        let message = match err {
            ApplicationError::Validation(msg)
            | ApplicationError::NotFound(msg)
            | ApplicationError::Conflict(msg)
            | ApplicationError::Unauthorized(msg)
            // Infrastructure messages are written for clients at the point of failure.
            | ApplicationError::Infrastructure(msg) => msg,
            ApplicationError::Domain(DomainError::Persistence(_)) => MSG_INTERNAL.to_string(),
            ApplicationError::Domain(domain_err) => domain_err.message().to_string(),
            ApplicationError::Feed(FeedError::PageOutOfRange { .. }) => {
                MSG_NOTHING_FOUND.to_string()
            }
            ApplicationError::Feed(FeedError::InvalidSortToken(_)) => MSG_INTERNAL.to_string(),
        };
        Self { message }
    }

    pub fn text(&self) -> &str {
        &self.message
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        Json(StatusEnvelope::error(self.message)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
