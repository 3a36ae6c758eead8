//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type that wraps domain-specific errors and implements `IntoResponse` so handlers can
//! return it directly. Every error body has the shape `{"message": "..."}`.

pub mod auth;
pub mod config;
pub mod player;
pub mod team;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{auth::AuthError, config::ConfigError, player::PlayerError, team::TeamError},
};

/// Top-level application error type.
///
/// Aggregates every error that can occur in the application and provides automatic
/// conversion to HTTP responses. Domain errors (`AuthError`, `PlayerError`, `TeamError`)
/// handle their own response mapping; everything else is an internal error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Only expected before the server is listening; results in 500 if it ever reaches a
    /// response.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing or rejected bearer token.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Player validation, lookup or write failure.
    ///
    /// Delegates to `PlayerError::into_response()` for endpoint-specific status codes.
    #[error(transparent)]
    PlayerErr(#[from] PlayerError),

    /// Team criterion validation or selection failure.
    ///
    /// Delegates to `TeamError::into_response()` (400 Bad Request).
    #[error(transparent)]
    TeamErr(#[from] TeamError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error, typically from binding or serving the TCP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `AuthErr`, `PlayerErr` and `TeamErr`, delegated to the wrapped error
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::PlayerErr(err) => err.into_response(),
            Self::TeamErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client so implementation details are not exposed. Used as the fallback for errors that
/// don't have a specific HTTP response mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new("Internal server error")),
        )
            .into_response()
    }
}
