//! Spawns the real router on an ephemeral local port for HTTP round-trip tests.

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use test_utils::builder::TestBuilder;

use crate::server::{
    middleware::auth::{PresenceVerifier, TokenVerifier},
    router::router,
    state::AppState,
};

/// A running test server together with the database it serves.
pub struct TestServer {
    pub base_url: String,
    pub db: DatabaseConnection,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Starts the application router over a fresh in-memory roster database, accepting
    /// any bearer token.
    pub async fn start() -> Self {
        Self::start_with_verifier(Arc::new(PresenceVerifier)).await
    }

    /// Starts the application router with a custom token verifier.
    pub async fn start_with_verifier(token_verifier: Arc<dyn TokenVerifier>) -> Self {
        let mut test = TestBuilder::new()
            .with_roster_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.take().unwrap();

        let app = router(AppState::new(db.clone(), token_verifier));
        let base_url = serve(app).await;

        Self {
            base_url,
            db,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Binds `app` on 127.0.0.1 with an OS-assigned port and serves it in the background.
///
/// Returns the base URL, e.g. `http://127.0.0.1:54321`.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
