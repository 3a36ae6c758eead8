pub use super::player::Entity as Player;
pub use super::player_skill::Entity as PlayerSkill;
