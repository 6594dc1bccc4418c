//! Message storage
//!
//! `MessageStore` is the seam handlers depend on. The Postgres store resolves
//! the connector on every call so a missing `DATABASE_URL` turns into a
//! per-request error instead of a startup failure.

pub mod messages;

use async_trait::async_trait;
use serde::Serialize;

use crate::models::{Message, MessageText};

pub use messages::{MessageRepo, PgMessageStore};

/// Database error type
///
/// `Display` is the bare message text; it is returned to clients as-is.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Connection string missing or unusable
    #[error("{0}")]
    Config(String),

    /// Store cannot serve requests (e.g. in-memory state poisoned)
    #[error("{0}")]
    Unavailable(String),

    #[error("{}", driver_message(.0))]
    Sqlx(#[from] sqlx::Error),
}

/// Prefer the server's own message for errors raised by Postgres.
fn driver_message(err: &sqlx::Error) -> String {
    match err.as_database_error() {
        Some(db) => db.message().to_string(),
        None => err.to_string(),
    }
}

/// What backs a store, as reported by `/health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStatus {
    pub backend: &'static str,
    /// False when the first database call is bound to fail
    pub configured: bool,
}

/// Storage for messages
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Backend name and whether it has what it needs to run.
    fn status(&self) -> StoreStatus;

    /// Up to `limit` messages, newest (highest id) first.
    async fn recent(&self, limit: i64) -> Result<Vec<Message>, DbError>;

    /// Insert a message and return it with its assigned id and timestamp.
    async fn insert(&self, text: &MessageText) -> Result<Message, DbError>;
}
