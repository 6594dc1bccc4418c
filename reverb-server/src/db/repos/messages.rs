//! Message repository
//!
//! Columns are cast on the way out so tables created with `integer` ids or
//! `timestamp` (no zone) columns decode the same as the migrated schema.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, MessageStore, StoreStatus};
use crate::db::DatabaseConnector;
use crate::models::{Message, MessageText};

/// Message repository
pub struct MessageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Most recent messages by descending id.
    pub async fn recent(&self, limit: i64) -> Result<Vec<Message>, DbError> {
        let rows = sqlx::query_as::<_, Message>(
            r#"
            SELECT id::bigint AS id, text, created_at::timestamptz AS created_at
            FROM messages
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert already-validated text.
    pub async fn create(&self, text: &MessageText) -> Result<Message, DbError> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (text)
            VALUES ($1)
            RETURNING id::bigint AS id, text, created_at::timestamptz AS created_at
            "#,
        )
        .bind(text.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(message)
    }
}

/// Postgres-backed `MessageStore`
#[derive(Debug, Clone)]
pub struct PgMessageStore {
    connector: Arc<DatabaseConnector>,
}

impl PgMessageStore {
    pub fn new(connector: Arc<DatabaseConnector>) -> Self {
        Self { connector }
    }

    pub fn connector(&self) -> &DatabaseConnector {
        &self.connector
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    fn status(&self) -> StoreStatus {
        StoreStatus {
            backend: "postgres",
            configured: self.connector.is_configured(),
        }
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Message>, DbError> {
        let pool = self.connector.handle()?;
        MessageRepo::new(pool).recent(limit).await
    }

    async fn insert(&self, text: &MessageText) -> Result<Message, DbError> {
        let pool = self.connector.handle()?;
        MessageRepo::new(pool).create(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, DatabaseConfig};
    use crate::models::MESSAGE_LIST_LIMIT;

    #[tokio::test]
    async fn unconfigured_store_reports_config_error() {
        let connector = DatabaseConnector::new(DatabaseConfig {
            url: None,
            max_connections: 1,
        });
        let store = PgMessageStore::new(Arc::new(connector));

        let err = store.recent(MESSAGE_LIST_LIMIT).await.unwrap_err();
        assert_eq!(err.to_string(), "DATABASE_URL is not set.");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_list_newest_first() {
        let store = PgMessageStore::new(Arc::new(DatabaseConnector::from_env()));
        let pool = store.connector().handle().expect("DATABASE_URL required");
        migrations::run(pool).await.expect("migrations failed");

        let first = store.insert(&MessageText::new("first").unwrap()).await.unwrap();
        let second = store.insert(&MessageText::new("  second ").unwrap()).await.unwrap();
        assert!(second.id > first.id);
        assert_eq!(second.text, "second");

        let listed = store.recent(MESSAGE_LIST_LIMIT).await.unwrap();
        assert!(listed.len() as i64 <= MESSAGE_LIST_LIMIT);
        assert_eq!(listed[0].id, second.id);
        assert!(listed.windows(2).all(|w| w[0].id > w[1].id));
    }
}
