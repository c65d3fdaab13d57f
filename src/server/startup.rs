use axum::http::{HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the URL from configuration, then runs all
/// pending SeaORM migrations so the schema is up-to-date before serving requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// The identity provider writes the authenticated user into this same store, which
/// is how the server listing learns who the caller is.
///
/// # Arguments
/// - `db` - Database connection whose SQLite pool hosts the session table
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer with a 7 day inactivity expiry
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the CORS layer for a browser client served from `origin`.
///
/// # Returns
/// - `Ok(CorsLayer)` - Allows credentialed GET requests from the origin
/// - `Err(AppError::ConfigErr)` - The origin is not a valid header value
pub fn cors_layer(origin: &str) -> Result<CorsLayer, AppError> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "ALLOWED_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_credentials(true))
}
