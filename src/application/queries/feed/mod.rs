mod service;
mod show;
mod viewer;

pub use service::FeedQueryService;
pub use show::ShowFeedQuery;
