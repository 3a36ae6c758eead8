use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::MessageDto,
        team::{TeamCriterionDto, TeamPlayerDto},
    },
    server::{
        error::{team::TeamError, AppError},
        model::team::TeamCriterion,
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

fn not_an_array() -> TeamError {
    TeamError::InvalidCriterion("The team request must be an array of criteria.".to_string())
}

/// Assemble a team from selection criteria.
///
/// For each criterion in order, picks the players of the requested position with the
/// highest value in the main skill, falling back to their best skill of any kind when
/// nobody at that position has the main skill. The selections are concatenated.
///
/// # Returns
/// - `200 OK` - Selected players in criteria order
/// - `400 Bad Request` - Invalid criterion, or a position without enough players
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/team",
    tag = TEAM_TAG,
    request_body = Vec<TeamCriterionDto>,
    responses(
        (status = 200, description = "Successfully selected team", body = Vec<TeamPlayerDto>),
        (status = 400, description = "Invalid criteria or insufficient players", body = MessageDto),
        (status = 401, description = "Missing or rejected bearer token", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn process_team(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let elements = match payload {
        Ok(Json(Value::Array(elements))) => elements,
        Ok(Json(_)) => return Err(not_an_array().into()),
        Err(rejection) => {
            tracing::debug!("Unreadable team body: {}", rejection);
            return Err(not_an_array().into());
        }
    };

    let dtos: Vec<TeamCriterionDto> = elements
        .into_iter()
        .map(TeamCriterionDto::from_value)
        .collect();

    let criteria = TeamCriterion::from_dtos(&dtos)?;

    let service = TeamService::new(&state.db);
    let team: Vec<TeamPlayerDto> = service
        .select(&criteria)
        .await?
        .into_iter()
        .map(|p| p.into_team_dto())
        .collect();

    Ok((StatusCode::OK, Json(team)))
}
