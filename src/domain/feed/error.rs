use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("wrong sorting parameter: {0}")]
    InvalidSortToken(String),
    #[error("nothing found on page {page}")]
    PageOutOfRange { page: u32 },
}
