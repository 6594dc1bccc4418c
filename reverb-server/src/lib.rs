//! reverb-server: message log and string reversal over HTTP
//!
//! Exposes `/api/messages` (Postgres-backed), `/api/reverse` (pure), and a
//! small form client at `/`.

pub mod db;
pub mod http;
pub mod models;

pub use db::{
    DatabaseConfig, DatabaseConnector, DbError, InMemoryStore, MessageStore, PgMessageStore,
};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
