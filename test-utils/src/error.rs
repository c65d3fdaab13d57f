use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to migrate the session store table.
    #[error(transparent)]
    Session(#[from] sea_orm::SqlxError),
}
