// src/presentation/http/extractors.rs
use crate::{
    application::dto::AuthenticatedUser,
    presentation::http::{
        error::{HttpError, MSG_AUTHORIZATION_FAILED, MSG_DECODE_BODY, MSG_INTERNAL},
        state::HttpState,
    },
};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::{HeaderName, HeaderValue, request::Parts},
};
use headers::{Header, HeaderMapExt};
use serde::de::DeserializeOwned;
use std::convert::Infallible;

pub static AUTHORIZATION_ACCESS: HeaderName = HeaderName::from_static("authorization-access");

/// `Authorization-access: <token>`; a leading `Bearer ` is tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationAccess(String);

impl AuthorizationAccess {
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl Header for AuthorizationAccess {
    fn name() -> &'static HeaderName {
        &AUTHORIZATION_ACCESS
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let raw = values
            .next()
            .and_then(|value| value.to_str().ok())
            .ok_or_else(headers::Error::invalid)?;
        let token = raw
            .trim_start()
            .strip_prefix("Bearer ")
            .unwrap_or(raw)
            .trim();
        if token.is_empty() {
            return Err(headers::Error::invalid());
        }
        Ok(Self(token.to_owned()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

/// Raw credential, if the request carries a readable one. Never rejects.
#[derive(Debug, Clone, Default)]
pub struct AccessToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for AccessToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .typed_get::<AuthorizationAccess>()
            .map(|header| header.0);
        Ok(Self(token))
    }
}

fn http_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        tracing::error!("application state missing from request extensions");
        HttpError::message(MSG_INTERNAL)
    })
}

/// A caller with a valid credential; anything else is "authorization failed".
#[derive(Debug, Clone)]
pub struct Authorized(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for Authorized {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = http_state(parts)?;
        let header = parts
            .headers
            .typed_get::<AuthorizationAccess>()
            .ok_or_else(|| HttpError::message(MSG_AUTHORIZATION_FAILED))?;

        let user = state
            .services
            .authenticate(header.token())
            .await
            .map_err(|err| {
                tracing::info!(error = %err, "authorization failed");
                HttpError::message(MSG_AUTHORIZATION_FAILED)
            })?;

        Ok(Self(user))
    }
}

/// The caller's identity when a valid credential is present. Invalid
/// credentials are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct MaybeAuthorized(pub Option<AuthenticatedUser>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuthorized {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = http_state(parts)?;
        let Some(header) = parts.headers.typed_get::<AuthorizationAccess>() else {
            return Ok(Self(None));
        };
        Ok(Self(state.services.authenticate(header.token()).await.ok()))
    }
}

/// `Json<T>` whose rejection is the envelope's "failed to decode request body".
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::info!(error = %rejection, "failed to decode request body");
            HttpError::message(MSG_DECODE_BODY)
        })?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    fn headers_with(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(&AUTHORIZATION_ACCESS, HeaderValue::from_str(value).unwrap());
        map
    }

    #[test]
    fn raw_token_is_accepted() {
        let header = headers_with("abc.def").typed_get::<AuthorizationAccess>().unwrap();
        assert_eq!(header.token(), "abc.def");
    }

    #[test]
    fn bearer_prefix_is_stripped() {
        let header = headers_with("Bearer abc.def")
            .typed_get::<AuthorizationAccess>()
            .unwrap();
        assert_eq!(header.token(), "abc.def");
    }

    #[test]
    fn blank_value_is_absent() {
        assert!(headers_with("   ").typed_get::<AuthorizationAccess>().is_none());
        assert!(headers_with("Bearer ").typed_get::<AuthorizationAccess>().is_none());
    }
}
