// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of creation timestamps for users and adverts.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
