// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{adverts::AdvertCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{
            media::ImageValidator,
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::feed::FeedQueryService,
    },
    domain::{
        advert::{AdvertReadRepository, AdvertWriteRepository},
        feed::FeedSettings,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub advert_commands: Arc<AdvertCommandService>,
    pub feed_queries: Arc<FeedQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        advert_write_repo: Arc<dyn AdvertWriteRepository>,
        advert_read_repo: Arc<dyn AdvertReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        image_validator: Arc<dyn ImageValidator>,
        clock: Arc<dyn Clock>,
        feed_settings: FeedSettings,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let advert_commands = Arc::new(AdvertCommandService::new(
            Arc::clone(&advert_write_repo),
            Arc::clone(&image_validator),
            Arc::clone(&clock),
        ));

        let feed_queries = Arc::new(FeedQueryService::new(
            Arc::clone(&advert_read_repo),
            Arc::clone(&token_manager),
            feed_settings,
        ));

        Self {
            user_commands,
            advert_commands,
            feed_queries,
            token_manager,
        }
    }

    /// Validates a raw access token. Used by endpoints that require a signed-in user.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
