// src/domain/mod.rs
pub mod advert;
pub mod errors;
pub mod feed;
pub mod user;
