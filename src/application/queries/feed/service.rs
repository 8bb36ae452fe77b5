use std::sync::Arc;

use crate::{
    application::ports::security::TokenManager,
    domain::{advert::AdvertReadRepository, feed::FeedSettings},
};

pub struct FeedQueryService {
    pub(super) read_repo: Arc<dyn AdvertReadRepository>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) settings: FeedSettings,
}

impl FeedQueryService {
    pub fn new(
        read_repo: Arc<dyn AdvertReadRepository>,
        token_manager: Arc<dyn TokenManager>,
        settings: FeedSettings,
    ) -> Self {
        Self {
            read_repo,
            token_manager,
            settings,
        }
    }
}
