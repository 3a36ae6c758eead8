use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Lowercase position name (`defender`, `midfielder`, `forward`).
    pub position: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_skill::Entity")]
    PlayerSkill,
}

impl Related<super::player_skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerSkill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
