use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::MessageDto,
        player::{PlayerDto, PlayerRequestDto},
    },
    server::{
        error::AppError,
        model::player::{CreatePlayerParams, UpdatePlayerParams},
        service::player::PlayerService,
        state::AppState,
        util::parse::parse_player_id,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Unwraps a JSON body, treating anything that is not a JSON object as an empty request so
/// validation reports the first missing field.
fn request_body(payload: Result<Json<Value>, JsonRejection>) -> PlayerRequestDto {
    match payload {
        Ok(Json(body)) => PlayerRequestDto::from_value(body),
        Err(rejection) => {
            tracing::debug!("Unreadable player body: {}", rejection);
            PlayerRequestDto::default()
        }
    }
}

/// List all players.
///
/// Returns every player with its skills, ordered by id.
///
/// # Returns
/// - `200 OK` - All players
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved players", body = Vec<PlayerDto>),
        (status = 401, description = "Missing or rejected bearer token", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_players(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    let players: Vec<PlayerDto> = service
        .list()
        .await?
        .into_iter()
        .map(|p| p.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(players)))
}

/// Get a player by ID.
///
/// # Returns
/// - `200 OK` - The player with its skills
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `404 Not Found` - No player with that id (including non-numeric ids)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player", body = PlayerDto),
        (status = 401, description = "Missing or rejected bearer token", body = MessageDto),
        (status = 404, description = "Player not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_player_id(id)?;

    let service = PlayerService::new(&state.db);
    let player = service.get(id).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Create a player.
///
/// Validates the body, then stores the player and its skills in one transaction.
///
/// # Returns
/// - `201 Created` - The stored player with assigned ids
/// - `400 Bad Request` - First violated validation rule, or a failed write
/// - `401 Unauthorized` - Missing or rejected bearer token
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = PlayerRequestDto,
    responses(
        (status = 201, description = "Successfully created player", body = PlayerDto),
        (status = 400, description = "Invalid player data or failed write", body = MessageDto),
        (status = 401, description = "Missing or rejected bearer token", body = MessageDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePlayerParams::from_dto(request_body(payload))?;

    let service = PlayerService::new(&state.db);
    let player = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

/// Update a player.
///
/// Replaces the player's name, position and complete skill set. The body is validated
/// before the id is looked up.
///
/// # Returns
/// - `200 OK` - The updated player
/// - `400 Bad Request` - First violated validation rule, or a failed write
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `404 Not Found` - No player with that id
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    request_body = PlayerRequestDto,
    responses(
        (status = 200, description = "Successfully updated player", body = PlayerDto),
        (status = 400, description = "Invalid player data or failed write", body = MessageDto),
        (status = 401, description = "Missing or rejected bearer token", body = MessageDto),
        (status = 404, description = "Player not found", body = MessageDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dto = request_body(payload);
    let id = parse_player_id(id)?;
    let params = UpdatePlayerParams::from_dto(id, dto)?;

    let service = PlayerService::new(&state.db);
    let player = service.update(params).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Delete a player and its skills.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `404 Not Found` - No player with that id
/// - `500 Internal Server Error` - The delete failed
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted player", body = MessageDto),
        (status = 401, description = "Missing or rejected bearer token", body = MessageDto),
        (status = 404, description = "Player not found", body = MessageDto),
        (status = 500, description = "Failed to delete player", body = MessageDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_player_id(id)?;

    let service = PlayerService::new(&state.db);
    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Player deleted successfully")),
    ))
}
