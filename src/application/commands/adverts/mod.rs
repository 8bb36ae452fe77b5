mod create;
mod service;

pub use create::CreateAdvertCommand;
pub use service::AdvertCommandService;
