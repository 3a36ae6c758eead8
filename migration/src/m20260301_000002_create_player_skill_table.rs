use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerSkill::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerSkill::Id))
                    .col(integer(PlayerSkill::PlayerId))
                    .col(string(PlayerSkill::Skill))
                    .col(integer(PlayerSkill::Value))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_skill_player_id")
                            .from(PlayerSkill::Table, PlayerSkill::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_skill_player_id")
                    .table(PlayerSkill::Table)
                    .col(PlayerSkill::PlayerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerSkill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerSkill {
    Table,
    Id,
    PlayerId,
    Skill,
    Value,
}
