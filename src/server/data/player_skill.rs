use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::player::{PlayerSkill, SkillParam};

/// Skill rows are owned by their player; callers outside the player lifecycle should go
/// through `PlayerRepository` instead.
pub struct PlayerSkillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerSkillRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a single skill row for a player
    pub async fn create(&self, player_id: i32, param: SkillParam) -> Result<PlayerSkill, DbErr> {
        let entity = entity::player_skill::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            skill: ActiveValue::Set(param.skill.as_str().to_string()),
            value: ActiveValue::Set(param.value),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PlayerSkill::from_entity(entity)
    }

    /// Inserts skill rows one by one so their ids follow slice order
    pub async fn create_many(
        &self,
        player_id: i32,
        params: &[SkillParam],
    ) -> Result<Vec<PlayerSkill>, DbErr> {
        let mut skills = Vec::with_capacity(params.len());
        for param in params {
            skills.push(self.create(player_id, *param).await?);
        }

        Ok(skills)
    }

    /// Gets all skills of a player ordered by id
    pub async fn get_by_player_id(&self, player_id: i32) -> Result<Vec<PlayerSkill>, DbErr> {
        entity::prelude::PlayerSkill::find()
            .filter(entity::player_skill::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::player_skill::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PlayerSkill::from_entity)
            .collect()
    }

    /// Deletes all skills of a player, returning how many rows were removed
    pub async fn delete_by_player_id(&self, player_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlayerSkill::delete_many()
            .filter(entity::player_skill::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
