mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server_directory=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    let mut app = router::router()
        .with_state(AppState::new(db))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.allowed_origin {
        app = app.layer(startup::cors_layer(origin)?);
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
