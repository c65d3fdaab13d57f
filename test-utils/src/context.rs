use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment holding an in-memory database and an optional session.
///
/// Both are created lazily on first access and live as long as the context.
pub struct TestContext {
    /// Connection to the in-memory SQLite database, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session stored in the same in-memory database, created by `session()`.
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates an empty context with no connection or session yet.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database connection, connecting to `sqlite::memory:` on first use.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// Usually called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the sqlite session store on first use.
    ///
    /// The session table lives in the same in-memory database as `db`, so the
    /// session behaves the way it does behind `SessionManagerLayer` in production.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError)` - Failed to connect or migrate the session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());
                session_store.migrate().await?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Initializes both the database and the session and borrows them together.
    ///
    /// Avoids holding overlapping mutable borrows when a test needs both.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - References to both
    /// - `Err(TestError)` - Failed to initialize either
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}
