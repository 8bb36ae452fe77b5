// src/application/ports/media.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait ImageValidator: Send + Sync {
    /// Checks that `url` points at an acceptable advert picture.
    ///
    /// Rejections are reported as `ApplicationError::Validation` with a
    /// client-readable message.
    async fn validate(&self, url: &str) -> ApplicationResult<()>;
}
