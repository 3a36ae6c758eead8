use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The request carried no usable bearer token.
    ///
    /// Covers a missing `Authorization` header, a scheme other than `Bearer`, and an empty
    /// token. Results in a 401 Unauthorized response.
    #[error("Token not provided")]
    TokenNotProvided,

    /// A bearer token was supplied but the configured verifier rejected it.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Converts authentication errors into 401 Unauthorized responses.
///
/// The error's display text is used as the response message. Rejections are logged at
/// debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(MessageDto::new(self.to_string())),
        )
            .into_response()
    }
}
