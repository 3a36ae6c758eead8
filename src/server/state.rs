//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler and middleware
//! invocation through axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::middleware::auth::TokenVerifier;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn TokenVerifier>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Decides whether a bearer token grants access to the API routes.
    pub token_verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_verifier` - Verifier consulted by the bearer token middleware
    pub fn new(db: DatabaseConnection, token_verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { db, token_verifier }
    }
}
