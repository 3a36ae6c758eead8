//! Request guards applied as axum middleware layers.

pub mod auth;
