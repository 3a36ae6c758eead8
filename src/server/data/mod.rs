//! Database repository layer.
//!
//! Repositories handle all database reads and writes for players and their skills. They use
//! SeaORM entity models internally and return domain models, so the entity-to-domain
//! conversion happens here and nowhere else.

pub mod player;
pub mod player_skill;

#[cfg(test)]
mod test;
