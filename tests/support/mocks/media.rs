// tests/support/mocks/media.rs
use admarket_core::application::{
    ApplicationResult, error::ApplicationError, ports::media::ImageValidator,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// 受け取った URL を記録し、常に受理する
#[derive(Default)]
pub struct AcceptingImageValidator {
    pub seen: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageValidator for AcceptingImageValidator {
    async fn validate(&self, url: &str) -> ApplicationResult<()> {
        self.seen.lock().unwrap().push(url.to_owned());
        Ok(())
    }
}

/// 常に同じメッセージで拒否する
pub struct RejectingImageValidator(pub &'static str);

#[async_trait]
impl ImageValidator for RejectingImageValidator {
    async fn validate(&self, _url: &str) -> ApplicationResult<()> {
        Err(ApplicationError::validation(self.0))
    }
}

/// 検証器自体の障害を模す（詳細はクライアントに出てはならない）
pub struct BrokenImageValidator;

#[async_trait]
impl ImageValidator for BrokenImageValidator {
    async fn validate(&self, _url: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure(
            "image header task: task 7 panicked",
        ))
    }
}
