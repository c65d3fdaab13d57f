//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for reading servers, categories and users.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided database pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
