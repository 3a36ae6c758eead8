use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::MessageDto, player::Position};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TeamError {
    /// A criterion field is missing or holds an unknown value, or the body is not an array.
    ///
    /// Results in 400 Bad Request with the message as-is.
    #[error("{0}")]
    InvalidCriterion(String),

    /// Not enough players matched a criterion.
    ///
    /// Results in 400 Bad Request naming the criterion's position.
    #[error("Insufficient number of players for position: {0}")]
    InsufficientPlayers(Position),
}

impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        tracing::debug!("Team selection rejected: {}", self);

        (StatusCode::BAD_REQUEST, Json(MessageDto::new(self.to_string()))).into_response()
    }
}
