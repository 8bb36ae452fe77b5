use std::sync::Arc;

use crate::{
    application::ports::{media::ImageValidator, time::Clock},
    domain::advert::AdvertWriteRepository,
};

pub struct AdvertCommandService {
    pub(super) write_repo: Arc<dyn AdvertWriteRepository>,
    pub(super) image_validator: Arc<dyn ImageValidator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AdvertCommandService {
    pub fn new(
        write_repo: Arc<dyn AdvertWriteRepository>,
        image_validator: Arc<dyn ImageValidator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            image_validator,
            clock,
        }
    }
}
