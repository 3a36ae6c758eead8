use crate::server::{
    error::auth::AuthError,
    middleware::auth::{
        bearer_token, require_bearer_token, PresenceVerifier, StaticTokenVerifier, TokenVerifier,
    },
    state::AppState,
    util::test_server::serve,
};
use axum::{
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue, StatusCode},
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use test_utils::builder::TestBuilder;

mod bearer_token;
mod verifier;
