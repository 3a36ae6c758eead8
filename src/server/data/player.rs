use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::player::Position,
    server::{
        data::player_skill::PlayerSkillRepository,
        model::player::{CreatePlayerParams, Player, UpdatePlayerParams},
    },
};

/// Repository for players and, through them, their skills.
///
/// Generic over the connection so the service can run multi-step writes inside a
/// `DatabaseTransaction`.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a player and inserts its skills in the given order
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, DbErr> {
        let now = Utc::now();

        let entity = entity::player::ActiveModel {
            name: ActiveValue::Set(params.name),
            position: ActiveValue::Set(params.position.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let skills = PlayerSkillRepository::new(self.db)
            .create_many(entity.id, &params.skills)
            .await?;

        let mut player = Player::from_entity(entity, Vec::new())?;
        player.skills = skills;

        Ok(player)
    }

    /// Gets every player with skills, ordered by player id
    pub async fn get_all(&self) -> Result<Vec<Player>, DbErr> {
        let rows = entity::prelude::Player::find()
            .find_with_related(entity::prelude::PlayerSkill)
            .order_by_asc(entity::player::Column::Id)
            .order_by_asc(entity::player_skill::Column::Id)
            .all(self.db)
            .await?;

        Self::into_players(rows)
    }

    /// Gets a player with skills by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let Some(entity) = entity::prelude::Player::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut player = Player::from_entity(entity, Vec::new())?;
        player.skills = PlayerSkillRepository::new(self.db)
            .get_by_player_id(id)
            .await?;

        Ok(Some(player))
    }

    /// Gets every player at a position with skills, ordered by player id
    pub async fn get_by_position(&self, position: Position) -> Result<Vec<Player>, DbErr> {
        let rows = entity::prelude::Player::find()
            .filter(entity::player::Column::Position.eq(position.as_str()))
            .find_with_related(entity::prelude::PlayerSkill)
            .order_by_asc(entity::player::Column::Id)
            .order_by_asc(entity::player_skill::Column::Id)
            .all(self.db)
            .await?;

        Self::into_players(rows)
    }

    /// Checks whether a player with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Overwrites name and position and replaces the complete skill set.
    ///
    /// Returns `None` without writing anything if the player doesn't exist.
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Option<Player>, DbErr> {
        if !self.exists(params.id).await? {
            return Ok(None);
        }

        let entity = entity::player::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            name: ActiveValue::Set(params.name),
            position: ActiveValue::Set(params.position.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        let skill_repo = PlayerSkillRepository::new(self.db);
        skill_repo.delete_by_player_id(params.id).await?;
        let skills = skill_repo.create_many(params.id, &params.skills).await?;

        let mut player = Player::from_entity(entity, Vec::new())?;
        player.skills = skills;

        Ok(Some(player))
    }

    /// Deletes a player's skills, then the player.
    ///
    /// Returns `false` if no player row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        PlayerSkillRepository::new(self.db)
            .delete_by_player_id(id)
            .await?;

        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Converts joined player and skill rows, keeping the query's order.
    fn into_players(
        rows: Vec<(entity::player::Model, Vec<entity::player_skill::Model>)>,
    ) -> Result<Vec<Player>, DbErr> {
        rows.into_iter()
            .map(|(player, skills)| Player::from_entity(player, skills))
            .collect()
    }
}
