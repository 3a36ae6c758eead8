//! Domain & parameter models for player operations
//!
//! Defines the player and skill domain models, conversion from entity rows and into DTOs,
//! and the create/update parameter models together with the request validation that
//! produces them.

use sea_orm::DbErr;
use serde_json::Value;

use crate::{
    model::{
        player::{PlayerDto, PlayerRequestDto, PlayerSkillDto, Position, SkillKind},
        team::{TeamPlayerDto, TeamSkillDto},
    },
    server::error::player::PlayerError,
};

/// The player domain model, always carrying its full skill set ordered by skill id.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub position: Position,
    pub skills: Vec<PlayerSkill>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSkill {
    pub id: i32,
    pub player_id: i32,
    pub skill: SkillKind,
    pub value: i32,
}

impl PlayerSkill {
    /// Converts a skill row into the domain model.
    ///
    /// # Returns
    /// - `Ok(PlayerSkill)` - Converted skill
    /// - `Err(DbErr::Custom)` - Stored skill string is not a known skill kind
    pub fn from_entity(entity: entity::player_skill::Model) -> Result<Self, DbErr> {
        let skill = entity
            .skill
            .parse::<SkillKind>()
            .map_err(|e| DbErr::Custom(format!("player_skill {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            player_id: entity.player_id,
            skill,
            value: entity.value,
        })
    }

    pub fn into_dto(self) -> PlayerSkillDto {
        PlayerSkillDto {
            id: self.id,
            skill: self.skill,
            value: self.value,
            player_id: self.player_id,
        }
    }
}

impl Player {
    /// Converts a player row and its skill rows into the domain model.
    ///
    /// Skills are expected to already be ordered by id; the order is preserved.
    ///
    /// # Arguments
    /// - `entity` - The player row
    /// - `skills` - Every skill row owned by the player
    ///
    /// # Returns
    /// - `Ok(Player)` - Converted player
    /// - `Err(DbErr::Custom)` - Stored position or skill string is not a known value
    pub fn from_entity(
        entity: entity::player::Model,
        skills: Vec<entity::player_skill::Model>,
    ) -> Result<Self, DbErr> {
        let position = entity
            .position
            .parse::<Position>()
            .map_err(|e| DbErr::Custom(format!("player {}: {}", entity.id, e)))?;

        let skills = skills
            .into_iter()
            .map(PlayerSkill::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            position,
            skills,
        })
    }

    /// Highest value among this player's skills of the given kind.
    pub fn skill_value(&self, kind: SkillKind) -> Option<i32> {
        self.skills
            .iter()
            .filter(|s| s.skill == kind)
            .map(|s| s.value)
            .max()
    }

    /// Highest value among all of this player's skills.
    pub fn best_value(&self) -> Option<i32> {
        self.skills.iter().map(|s| s.value).max()
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            position: self.position,
            player_skills: self.skills.into_iter().map(PlayerSkill::into_dto).collect(),
        }
    }

    /// Converts into the reduced summary returned by team selection.
    pub fn into_team_dto(self) -> TeamPlayerDto {
        TeamPlayerDto {
            name: self.name,
            position: self.position,
            player_skills: self
                .skills
                .into_iter()
                .map(|s| TeamSkillDto {
                    skill: s.skill,
                    value: s.value,
                })
                .collect(),
        }
    }
}

/// A validated skill entry to be stored for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillParam {
    pub skill: SkillKind,
    pub value: i32,
}

/// Parameters for creating a new player together with its skills.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlayerParams {
    pub name: String,
    pub position: Position,
    pub skills: Vec<SkillParam>,
}

/// Parameters for replacing an existing player's name, position and full skill set.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlayerParams {
    pub id: i32,
    pub name: String,
    pub position: Position,
    pub skills: Vec<SkillParam>,
}

impl CreatePlayerParams {
    /// Validates a request body into create parameters.
    ///
    /// # Returns
    /// - `Ok(CreatePlayerParams)` - Body passed every rule
    /// - `Err(PlayerError::Validation)` - Message of the first violated rule
    pub fn from_dto(dto: PlayerRequestDto) -> Result<Self, PlayerError> {
        let (name, position, skills) = validate(&dto)?;

        Ok(Self {
            name,
            position,
            skills,
        })
    }
}

impl UpdatePlayerParams {
    /// Validates a request body into update parameters for player `id`.
    ///
    /// Existence of the player is not checked here.
    pub fn from_dto(id: i32, dto: PlayerRequestDto) -> Result<Self, PlayerError> {
        let (name, position, skills) = validate(&dto)?;

        Ok(Self {
            id,
            name,
            position,
            skills,
        })
    }
}

/// Renders a raw input for inclusion in an error message.
///
/// Strings are shown without quotes, anything else as JSON text.
pub(crate) fn render_input(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => Value::Null.to_string(),
    }
}

/// True for values that fail a "required" rule: absent, null, blank strings and empty arrays.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

fn parse_integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

fn validate(dto: &PlayerRequestDto) -> Result<(String, Position, Vec<SkillParam>), PlayerError> {
    let invalid = |msg: String| PlayerError::Validation(msg);

    let name = match dto.name.as_ref() {
        v if is_blank(v) => return Err(invalid("The name field is required.".to_string())),
        Some(Value::String(s)) => s.trim().to_string(),
        _ => return Err(invalid("The name field must be a string.".to_string())),
    };

    let position = match dto.position.as_ref() {
        v if is_blank(v) => return Err(invalid("The position field is required.".to_string())),
        Some(Value::String(s)) => s.parse::<Position>().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        invalid(format!(
            "Invalid value for position: {}",
            render_input(dto.position.as_ref())
        ))
    })?;

    let entries = match dto.player_skills.as_ref() {
        v if is_blank(v) => {
            return Err(invalid("The player skills field is required.".to_string()))
        }
        Some(Value::Array(items)) => items,
        _ => {
            return Err(invalid(
                "The player skills field must be an array.".to_string(),
            ))
        }
    };

    let mut kinds = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let raw = entry.get("skill");
        if is_blank(raw) {
            return Err(invalid(format!(
                "The player skills.{}.skill field is required.",
                i
            )));
        }

        let kind = raw
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<SkillKind>().ok())
            .ok_or_else(|| invalid(format!("Invalid value for skill: {}", render_input(raw))))?;
        kinds.push(kind);
    }

    let mut skills = Vec::with_capacity(entries.len());
    for (i, (entry, skill)) in entries.iter().zip(kinds).enumerate() {
        let raw = entry.get("value");
        if is_blank(raw) {
            return Err(invalid(format!(
                "The player skills.{}.value field is required.",
                i
            )));
        }

        let value = raw.and_then(parse_integer).ok_or_else(|| {
            invalid(format!(
                "The player skills.{}.value field must be an integer.",
                i
            ))
        })?;
        skills.push(SkillParam { skill, value });
    }

    Ok((name, position, skills))
}
