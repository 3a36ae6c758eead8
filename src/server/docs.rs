//! OpenAPI document for the HTTP API.
//!
//! Paths are registered by the router through `utoipa_axum::routes!`; this module only
//! carries the document metadata, shared schemas and the bearer security scheme.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::model::{
    api::MessageDto,
    player::{PlayerSkillRequestDto, Position, SkillKind},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "Player roster management and team selection"
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "player", description = "Create, read, update and delete players"),
        (name = "team", description = "Team selection by position and skill")
    ),
    components(schemas(MessageDto, PlayerSkillRequestDto, Position, SkillKind))
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by every protected path.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}
