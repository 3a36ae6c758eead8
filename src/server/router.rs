use axum::{middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{player, team},
    docs::ApiDoc,
    middleware::auth::require_bearer_token,
    state::AppState,
};

/// Builds the application router.
///
/// Player and team routes sit behind the bearer token middleware. Swagger UI and the
/// OpenAPI document at `/api/docs` are public. Request tracing and a permissive CORS
/// policy apply to every route.
pub fn router(state: AppState) -> Router {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(player::list_players, player::create_player))
        .routes(routes!(
            player::get_player,
            player::update_player,
            player::delete_player
        ))
        .routes(routes!(team::process_team))
        .split_for_parts();

    let api = api.route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_bearer_token,
    ));

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
