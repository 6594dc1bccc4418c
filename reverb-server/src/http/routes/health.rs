//! GET /health - process liveness plus the message store's readiness
//!
//! Never queries the database. A Postgres store without `DATABASE_URL`
//! reports `degraded` because every message call will fail with a 500.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::StoreStatus;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreStatus,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = state.store.status();
    let status = if store.configured { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store,
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DatabaseConfig, DatabaseConnector, InMemoryStore, PgMessageStore};

    fn pg_state(url: Option<&str>) -> Arc<AppState> {
        let connector = DatabaseConnector::new(DatabaseConfig {
            url: url.map(str::to_owned),
            max_connections: 1,
        });
        Arc::new(AppState::new(Arc::new(PgMessageStore::new(Arc::new(connector)))))
    }

    #[tokio::test]
    async fn unconfigured_postgres_is_degraded() {
        let Json(body) = health(State(pg_state(None))).await;
        assert_eq!(body.status, "degraded");
        assert_eq!(body.store.backend, "postgres");
        assert!(!body.store.configured);
    }

    #[tokio::test]
    async fn configured_postgres_is_ok() {
        let Json(body) = health(State(pg_state(Some("postgres://localhost/reverb")))).await;
        assert_eq!(body.status, "ok");
        assert!(body.store.configured);
    }

    #[tokio::test]
    async fn memory_store_is_ok() {
        let state = Arc::new(AppState::new(Arc::new(InMemoryStore::new())));
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.store.backend, "memory");
    }
}
