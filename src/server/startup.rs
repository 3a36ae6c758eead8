use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    middleware::auth::{PresenceVerifier, StaticTokenVerifier, TokenVerifier},
    router::router,
    state::AppState,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up to date before any request is served.
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

/// Chooses the token verifier for the API routes.
///
/// A configured `API_TOKEN` restricts access to that single token; otherwise any present
/// bearer token is accepted.
pub fn token_verifier(config: &Config) -> Arc<dyn TokenVerifier> {
    match &config.api_token {
        Some(token) => {
            tracing::info!("Accepting only the configured API token");
            Arc::new(StaticTokenVerifier::new(token.clone()))
        }
        None => {
            tracing::warn!("API_TOKEN not set, accepting any bearer token");
            Arc::new(PresenceVerifier)
        }
    }
}

/// Binds the listener and serves the application until Ctrl-C is received.
pub async fn serve(config: &Config, state: AppState) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!(
        "HTTP server started, listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
