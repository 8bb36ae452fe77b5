// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::login,
        crate::presentation::http::controllers::adverts::create_advert,
        crate::presentation::http::controllers::feed::show_feed,
        super::routes::health
    ),
    components(
        schemas(
            crate::presentation::http::error::StatusEnvelope,
            crate::presentation::http::controllers::users::RegisterRequest,
            crate::presentation::http::controllers::users::RegisterResponse,
            crate::presentation::http::controllers::users::LoginRequest,
            crate::presentation::http::controllers::users::LoginResponse,
            crate::presentation::http::controllers::adverts::CreateAdvertRequest,
            crate::presentation::http::controllers::adverts::CreateAdvertResponse,
            crate::presentation::http::controllers::feed::FeedResponse,
            crate::application::dto::FeedItemDto
        )
    ),
    tags(
        (name = "Users", description = "Registration and login"),
        (name = "Adverts", description = "Advert publishing"),
        (name = "Feed", description = "Paged, sorted and price-filtered advert feed"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Ad Market API",
        description = "Classifieds marketplace backend. Every response is HTTP 200 with a `status` of `OK` or `Error`.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "authorizationAccess",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization-access"))),
        );
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
