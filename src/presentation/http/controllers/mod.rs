// src/presentation/http/controllers/mod.rs
pub mod adverts;
pub mod feed;
pub mod users;
