//! In-memory message store
//!
//! Backs `reverb serve --ephemeral` and the router tests. Ids start at 1 and
//! increase by one per insert.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{DbError, MessageStore, StoreStatus};
use crate::models::{Message, MessageText};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    messages: Mutex<Vec<Message>>,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call fail with a storage error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DbError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Message>>, DbError> {
        self.messages
            .lock()
            .map_err(|_| DbError::Unavailable("in-memory store poisoned".to_string()))
    }
}

#[async_trait]
impl MessageStore for InMemoryStore {
    fn status(&self) -> StoreStatus {
        StoreStatus {
            backend: "memory",
            configured: true,
        }
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Message>, DbError> {
        self.check()?;
        let messages = self.lock()?;
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(messages.iter().rev().take(take).cloned().collect())
    }

    async fn insert(&self, text: &MessageText) -> Result<Message, DbError> {
        self.check()?;
        let mut messages = self.lock()?;
        let id = messages.last().map_or(1, |m| m.id + 1);
        let message = Message {
            id,
            text: text.as_str().to_owned(),
            created_at: Utc::now(),
        };
        messages.push(message.clone());
        Ok(message)
    }
}
