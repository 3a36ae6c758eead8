use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::player::PlayerRepository,
    error::{player::PlayerError, AppError},
    model::player::{CreatePlayerParams, Player, UpdatePlayerParams},
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every player with skills, ordered by id
    pub async fn list(&self) -> Result<Vec<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a single player with skills
    ///
    /// # Returns
    /// - `Ok(Player)` - The player
    /// - `Err(AppError::PlayerErr(PlayerError::NotFound))` - No player with that id
    pub async fn get(&self, id: i32) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| PlayerError::NotFound(id.to_string()).into())
    }

    /// Creates a player and its skills in one transaction
    ///
    /// Any database failure is reported as `PlayerError::WriteFailed` and nothing is stored.
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        let player = self
            .create_in_transaction(params)
            .await
            .map_err(PlayerError::WriteFailed)?;

        tracing::debug!("Created player {} with {} skills", player.id, player.skills.len());

        Ok(player)
    }

    /// Replaces a player's name, position and skills in one transaction
    ///
    /// # Returns
    /// - `Ok(Player)` - The updated player
    /// - `Err(PlayerError::NotFound)` - No player with that id
    /// - `Err(PlayerError::WriteFailed)` - Database failure, nothing changed
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Player, AppError> {
        let id = params.id;

        let player = self
            .update_in_transaction(params)
            .await
            .map_err(PlayerError::WriteFailed)?
            .ok_or_else(|| PlayerError::NotFound(id.to_string()))?;

        tracing::debug!("Updated player {}", id);

        Ok(player)
    }

    /// Deletes a player and its skills in one transaction
    ///
    /// # Returns
    /// - `Ok(())` - Player deleted
    /// - `Err(PlayerError::NotFound)` - No player with that id
    /// - `Err(PlayerError::DeleteFailed)` - Database failure, nothing removed
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self
            .delete_in_transaction(id)
            .await
            .map_err(|source| PlayerError::DeleteFailed { id, source })?;

        if !deleted {
            return Err(PlayerError::NotFound(id.to_string()).into());
        }

        tracing::debug!("Deleted player {}", id);

        Ok(())
    }

    async fn create_in_transaction(&self, params: CreatePlayerParams) -> Result<Player, DbErr> {
        let txn = self.db.begin().await?;

        let player = PlayerRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(player)
    }

    async fn update_in_transaction(
        &self,
        params: UpdatePlayerParams,
    ) -> Result<Option<Player>, DbErr> {
        let txn = self.db.begin().await?;

        let player = PlayerRepository::new(&txn).update(params).await?;

        if player.is_some() {
            txn.commit().await?;
        }

        Ok(player)
    }

    async fn delete_in_transaction(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        let deleted = repo.delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
