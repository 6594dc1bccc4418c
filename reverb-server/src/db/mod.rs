//! Database layer - connector, migrations and message storage
//!
//! # Design Principles
//!
//! - One pool per process, owned by the connector and built on first use
//! - Handlers talk to a `MessageStore`, never to the pool directly
//! - Schema changes only run when asked for (`reverb migrate`)

pub mod connector;
pub mod memory;
pub mod migrations;
pub mod repos;

pub use connector::{DatabaseConfig, DatabaseConnector};
pub use memory::InMemoryStore;
pub use repos::*;
