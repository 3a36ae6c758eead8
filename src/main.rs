mod model;
mod server;

use crate::server::{config::Config, error::AppError, logs, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    logs::setup_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let token_verifier = startup::token_verifier(&config);

    tracing::info!("Starting server");

    startup::serve(&config, AppState::new(db, token_verifier)).await
}
