use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Decides whether a bearer token grants access.
///
/// Implementations must be cheap to call; the middleware consults the verifier on every
/// protected request.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<(), AuthError>;
}

/// Accepts any non-empty token.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceVerifier;

impl TokenVerifier for PresenceVerifier {
    fn verify(&self, _token: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Accepts exactly one configured token.
#[derive(Debug, Clone)]
pub struct StaticTokenVerifier {
    token: String,
}

impl StaticTokenVerifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> Result<(), AuthError> {
        if token == self.token {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// Auth schemes are case-insensitive (RFC 7235), so `bearer` and `BEARER` are accepted
/// alongside `Bearer`. Returns `None` when the header is missing, not valid text, uses
/// another scheme, or carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Middleware rejecting requests that lack a bearer token accepted by the configured
/// `TokenVerifier`.
///
/// # Returns
/// - The inner handler's response when the token is accepted
/// - `401 Unauthorized` with "Token not provided" when no token is present
/// - `401 Unauthorized` with "Invalid or expired token" when the verifier rejects it
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AuthError::TokenNotProvided)?;
    state.token_verifier.verify(token)?;

    Ok(next.run(request).await)
}
