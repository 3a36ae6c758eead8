//! Player skill factory for creating skill rows owned by a player.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test skill rows.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player_skill::PlayerSkillFactory;
///
/// let skill = PlayerSkillFactory::new(&db, player.id)
///     .skill("speed")
///     .value(75)
///     .build()
///     .await?;
/// ```
pub struct PlayerSkillFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    skill: String,
    value: i32,
}

impl<'a> PlayerSkillFactory<'a> {
    /// Creates a new PlayerSkillFactory with default values.
    ///
    /// Defaults:
    /// - skill: `"attack"`
    /// - value: 50
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `player_id` - ID of the owning player
    pub fn new(db: &'a DatabaseConnection, player_id: i32) -> Self {
        Self {
            db,
            player_id,
            skill: "attack".to_string(),
            value: 50,
        }
    }

    /// Sets the stored skill string. Not validated.
    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = skill.into();
        self
    }

    /// Sets the skill rating.
    pub fn value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    /// Builds and inserts the skill row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player_skill::Model)` - Created skill row
    /// - `Err(DbErr)` - Database error, including a foreign key violation for unknown players
    pub async fn build(self) -> Result<entity::player_skill::Model, DbErr> {
        entity::player_skill::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(self.player_id),
            skill: ActiveValue::Set(self.skill),
            value: ActiveValue::Set(self.value),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a skill row with the given kind and value.
///
/// # Example
///
/// ```rust,ignore
/// let skill = create_player_skill(&db, player.id, "attack", 90).await?;
/// ```
pub async fn create_player_skill(
    db: &DatabaseConnection,
    player_id: i32,
    skill: impl Into<String>,
    value: i32,
) -> Result<entity::player_skill::Model, DbErr> {
    PlayerSkillFactory::new(db, player_id)
        .skill(skill)
        .value(value)
        .build()
        .await
}
