// tests/support/helpers.rs
use admarket_core::application::{
    ports::{
        media::ImageValidator,
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use admarket_core::domain::{
    advert::{Advert, AdvertReadRepository, AdvertWriteRepository},
    feed::FeedSettings,
    user::UserRepository,
};
use admarket_core::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

use super::mocks::{
    AcceptingImageValidator, DummyPasswordHasher, DummyTokenManager, FixedClock, InMemoryAdvertRepo,
    InMemoryUserRepo,
};

pub const CREDENTIAL_HEADER: &str = "Authorization-access";

/// 差し替え可能な依存関係一式
pub struct TestDeps {
    pub users: Arc<InMemoryUserRepo>,
    pub adverts: Arc<InMemoryAdvertRepo>,
    pub advert_write: Arc<dyn AdvertWriteRepository>,
    pub advert_read: Arc<dyn AdvertReadRepository>,
    pub image_validator: Arc<dyn ImageValidator>,
    pub settings: FeedSettings,
}

impl TestDeps {
    pub fn new() -> Self {
        Self::with_adverts(Vec::new())
    }

    pub fn with_adverts(adverts: Vec<Advert>) -> Self {
        let store = Arc::new(InMemoryAdvertRepo::with(adverts));
        Self {
            users: Arc::new(InMemoryUserRepo::default()),
            adverts: Arc::clone(&store),
            advert_write: store.clone(),
            advert_read: store,
            image_validator: Arc::new(AcceptingImageValidator::default()),
            settings: FeedSettings::default(),
        }
    }

    pub fn router(&self) -> axum::Router {
        let user_repo: Arc<dyn UserRepository> = self.users.clone();
        let password_hasher: Arc<dyn PasswordHasher> = Arc::new(DummyPasswordHasher);
        let token_manager: Arc<dyn TokenManager> = Arc::new(DummyTokenManager);
        let clock: Arc<dyn Clock> = Arc::new(FixedClock);

        let services = Arc::new(ApplicationServices::new(
            user_repo,
            Arc::clone(&self.advert_write),
            Arc::clone(&self.advert_read),
            password_hasher,
            token_manager,
            Arc::clone(&self.image_validator),
            clock,
            self.settings,
        ));

        build_router(
            HttpState::new(services),
            &["http://localhost:3000".to_string()],
        )
    }
}

pub async fn make_test_router() -> axum::Router {
    TestDeps::new().router()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(CREDENTIAL_HEADER, token);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    post_raw(uri, token, body.to_string())
}

pub fn post_raw(uri: &str, token: Option<&str>, body: impl Into<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header(CREDENTIAL_HEADER, token);
    }
    builder.body(Body::from(body.into())).unwrap()
}

/// リクエストを送り、HTTP 200 と JSON 本文を確認して返す
pub async fn send(app: &axum::Router, req: Request<Body>) -> Value {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(
        status,
        StatusCode::OK,
        "unexpected status: {}",
        String::from_utf8_lossy(&body_bytes)
    );
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// エラーエンベロープ `{status: "Error", error}` であることを確認する
pub fn assert_error(json: &Value, expected: &str) {
    assert_eq!(json["status"], "Error", "body: {json}");
    assert_eq!(json["error"], expected, "body: {json}");
}

pub fn assert_ok(json: &Value) {
    assert_eq!(json["status"], "OK", "body: {json}");
    assert!(json.get("error").is_none(), "body: {json}");
}

/// フィード応答から価格の列を取り出す
pub fn prices(json: &Value) -> Vec<i64> {
    json["adverts"]
        .as_array()
        .expect("adverts array")
        .iter()
        .map(|item| item["price"].as_i64().expect("price"))
        .collect()
}
