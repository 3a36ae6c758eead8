use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::api::MessageDto;

/// Message returned when a create or update fails after validation passed.
pub const WRITE_FAILED_MESSAGE: &str = "An error occurred while processing the request.";

#[derive(Error, Debug)]
pub enum PlayerError {
    /// Request body violated a validation rule.
    ///
    /// Carries the message of the first violated rule. Results in 400 Bad Request.
    #[error("{0}")]
    Validation(String),

    /// No player exists with the requested id.
    ///
    /// The field holds the raw id as received, for logging. Results in 404 Not Found with
    /// the message "Player not found".
    #[error("Player not found: {0}")]
    NotFound(String),

    /// Persisting a create or update failed.
    ///
    /// Results in 400 Bad Request with a generic message; the source is logged.
    #[error("Failed to write player: {0}")]
    WriteFailed(#[source] DbErr),

    /// Deleting a player failed.
    ///
    /// Results in 500 Internal Server Error with the message "Failed to delete player".
    #[error("Failed to delete player {id}: {source}")]
    DeleteFailed {
        /// Id of the player being deleted
        id: i32,
        /// Underlying database error
        #[source]
        source: DbErr,
    },
}

/// Converts player errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` (rule message) and `WriteFailed` (generic message)
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For `DeleteFailed`
impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg) => {
                tracing::debug!("Player validation failed: {}", msg);
                (StatusCode::BAD_REQUEST, Json(MessageDto::new(msg))).into_response()
            }
            Self::NotFound(id) => {
                tracing::debug!("Player {} not found", id);
                (
                    StatusCode::NOT_FOUND,
                    Json(MessageDto::new("Player not found")),
                )
                    .into_response()
            }
            err @ Self::WriteFailed(_) => {
                tracing::error!("{}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(MessageDto::new(WRITE_FAILED_MESSAGE)),
                )
                    .into_response()
            }
            err @ Self::DeleteFailed { .. } => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageDto::new("Failed to delete player")),
                )
                    .into_response()
            }
        }
    }
}
