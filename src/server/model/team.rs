//! Domain model for team selection criteria.

use serde_json::Value;

use crate::{
    model::{
        player::{Position, SkillKind},
        team::TeamCriterionDto,
    },
    server::{error::team::TeamError, model::player::render_input},
};

/// A validated request for `number_of_players` players of `position`, preferring those
/// strongest in `main_skill`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamCriterion {
    pub position: Position,
    pub main_skill: SkillKind,
    pub number_of_players: usize,
}

impl TeamCriterion {
    /// Validates a single criterion.
    ///
    /// # Returns
    /// - `Ok(TeamCriterion)` - Every field is valid
    /// - `Err(TeamError::InvalidCriterion)` - First invalid field, checked in the order
    ///   position, main skill, number of players
    pub fn from_dto(dto: &TeamCriterionDto) -> Result<Self, TeamError> {
        let position = dto
            .position
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Position>().ok())
            .ok_or_else(|| invalid("position", dto.position.as_ref()))?;

        let main_skill = dto
            .main_skill
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<SkillKind>().ok())
            .ok_or_else(|| invalid("skill", dto.main_skill.as_ref()))?;

        let number_of_players = dto
            .number_of_players
            .as_ref()
            .and_then(parse_count)
            .ok_or_else(|| invalid("numberOfPlayers", dto.number_of_players.as_ref()))?;

        Ok(Self {
            position,
            main_skill,
            number_of_players,
        })
    }

    /// Validates every criterion of a request, failing on the first invalid one.
    pub fn from_dtos(dtos: &[TeamCriterionDto]) -> Result<Vec<Self>, TeamError> {
        dtos.iter().map(Self::from_dto).collect()
    }
}

fn invalid(field: &str, value: Option<&Value>) -> TeamError {
    TeamError::InvalidCriterion(format!(
        "Invalid value for {}: {}",
        field,
        render_input(value)
    ))
}

fn parse_count(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    }
}
