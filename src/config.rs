// src/config.rs
use crate::domain::{
    advert::value_objects::{MAX_PRICE, MIN_PRICE},
    feed::{FeedSettings, settings::DEFAULT_PAGE_SIZE},
};
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    biscuit_private_key: String,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    feed: FeedSettings,
    image_fetch_timeout: Duration,
    image_max_bytes: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://admarket.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_image_fetch_timeout() -> u64 {
    10
}

fn default_image_max_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got {value:?}"))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, after loading a `.env`
    /// file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let biscuit_private_key = lookup("BISCUIT_ROOT_PRIVATE_KEY")
            .ok_or(ConfigError::Missing("BISCUIT_ROOT_PRIVATE_KEY"))?;

        if biscuit_private_key.len() != 64
            || !biscuit_private_key.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid(
                "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
            ));
        }

        let token_ttl_secs =
            parse_number("TOKEN_TTL_SECONDS", lookup("TOKEN_TTL_SECONDS"), default_token_ttl())?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let page_size =
            parse_number("FEED_PAGE_SIZE", lookup("FEED_PAGE_SIZE"), DEFAULT_PAGE_SIZE)?;
        let max_price = parse_number("FEED_MAX_PRICE", lookup("FEED_MAX_PRICE"), MAX_PRICE)?;
        let feed = FeedSettings::new(page_size, MIN_PRICE, max_price)
            .map_err(|err| ConfigError::Invalid(err.message().to_string()))?;

        let image_fetch_timeout = parse_number(
            "IMAGE_FETCH_TIMEOUT_SECONDS",
            lookup("IMAGE_FETCH_TIMEOUT_SECONDS"),
            default_image_fetch_timeout(),
        )?;
        let image_max_bytes = parse_number(
            "IMAGE_MAX_BYTES",
            lookup("IMAGE_MAX_BYTES"),
            default_image_max_bytes(),
        )?;
        if image_max_bytes == 0 {
            return Err(ConfigError::Invalid("IMAGE_MAX_BYTES must be positive".into()));
        }

        Ok(Self {
            database_url,
            listen_addr,
            biscuit_private_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            feed,
            image_fetch_timeout: Duration::from_secs(image_fetch_timeout),
            image_max_bytes,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn biscuit_private_key(&self) -> &str {
        &self.biscuit_private_key
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn feed(&self) -> FeedSettings {
        self.feed
    }

    pub fn image_fetch_timeout(&self) -> Duration {
        self.image_fetch_timeout
    }

    /// Largest image body fetched while validating an advert picture.
    pub fn image_max_bytes(&self) -> usize {
        self.image_max_bytes
    }
}
