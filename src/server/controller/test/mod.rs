use crate::server::{
    middleware::auth::StaticTokenVerifier, util::test_server::TestServer,
};
use reqwest::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use std::sync::Arc;
use test_utils::factory;


const TOKEN: &str = "test-token";
