//! Classifieds marketplace backend: user accounts, advert publishing and a
//! paged, sorted, price-filtered advert feed over a JSON HTTP API.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
