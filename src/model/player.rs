use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use thiserror::Error;
use utoipa::ToSchema;

/// A string that does not name a variant of one of the closed roster enumerations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    /// Which enumeration was being parsed (`position` or `skill`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Role of a player on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// Every valid position, in declaration order.
    pub const ALL: [Position; 3] = [Position::Defender, Position::Midfielder, Position::Forward];

    /// Lowercase name used on the wire and in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Defender => "defender",
            Self::Midfielder => "midfielder",
            Self::Forward => "forward",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "position",
                value: s.to_string(),
            })
    }
}

/// Kind of rating a player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Defense,
    Attack,
    Speed,
    Strength,
    Stamina,
}

impl SkillKind {
    /// Every valid skill kind, in declaration order.
    pub const ALL: [SkillKind; 5] = [
        SkillKind::Defense,
        SkillKind::Attack,
        SkillKind::Speed,
        SkillKind::Strength,
        SkillKind::Stamina,
    ];

    /// Lowercase name used on the wire and in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Defense => "defense",
            Self::Attack => "attack",
            Self::Speed => "speed",
            Self::Strength => "strength",
            Self::Stamina => "stamina",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "skill",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub position: Position,
    pub player_skills: Vec<PlayerSkillDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSkillDto {
    pub id: i32,
    pub skill: SkillKind,
    pub value: i32,
    pub player_id: i32,
}

/// Body of `POST /api/players` and `PUT /api/players/{id}`.
///
/// Fields are kept as raw JSON so validation can report the first violated rule with the
/// offending input instead of a generic deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequestDto {
    #[serde(default)]
    #[schema(value_type = String)]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Position)]
    pub position: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Vec<PlayerSkillRequestDto>)]
    pub player_skills: Option<Value>,
}

impl PlayerRequestDto {
    /// Reads the request fields from a JSON body.
    ///
    /// Only an object carries fields. Any other body, arrays included, is an empty request.
    pub fn from_value(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                name: fields.remove("name"),
                position: fields.remove("position"),
                player_skills: fields.remove("playerSkills"),
            },
            _ => Self::default(),
        }
    }
}

/// Documented shape of one `playerSkills` entry in a [`PlayerRequestDto`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerSkillRequestDto {
    pub skill: SkillKind,
    pub value: i32,
}
