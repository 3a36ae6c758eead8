use crate::{
    model::player::SkillKind,
    server::{data::player_skill::PlayerSkillRepository, model::player::SkillParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod delete_by_player_id;
