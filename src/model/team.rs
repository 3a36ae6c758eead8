use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::player::{Position, SkillKind};

/// One entry of the `POST /api/team` body.
///
/// Kept as raw JSON for the same reason as `PlayerRequestDto`: invalid input is reported
/// verbatim in the error message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamCriterionDto {
    #[serde(default)]
    #[schema(value_type = Position)]
    pub position: Option<Value>,
    #[serde(default)]
    #[schema(value_type = SkillKind)]
    pub main_skill: Option<Value>,
    #[serde(default)]
    #[schema(value_type = u32)]
    pub number_of_players: Option<Value>,
}

impl TeamCriterionDto {
    /// Reads a criterion from one element of the request array.
    ///
    /// Elements that are not objects have no fields.
    pub fn from_value(element: Value) -> Self {
        match element {
            Value::Object(mut fields) => Self {
                position: fields.remove("position"),
                main_skill: fields.remove("mainSkill"),
                number_of_players: fields.remove("numberOfPlayers"),
            },
            _ => Self::default(),
        }
    }
}

/// A selected player as returned by team selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlayerDto {
    pub name: String,
    pub position: Position,
    pub player_skills: Vec<TeamSkillDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamSkillDto {
    pub skill: SkillKind,
    pub value: i32,
}
