// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod advert_repos;
pub mod media;
pub mod security;
pub mod time;
pub mod user_repo;

pub use advert_repos::{FailingAdvertRepo, InMemoryAdvertRepo};
pub use media::{AcceptingImageValidator, BrokenImageValidator, RejectingImageValidator};
pub use security::{ALICE_TOKEN, BOB_TOKEN, DummyPasswordHasher, DummyTokenManager, token_for};
pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
