pub mod adverts;
pub mod auth;
pub mod feed;
pub mod serde_time;
pub mod users;

pub use adverts::CreatedAdvertDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use feed::{FeedItemDto, FeedOutcome};
pub use users::{LoginResult, RegisteredUserDto};
