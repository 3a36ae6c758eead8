//! SeaORM entity definitions for the roster database.
//!
//! The schema mirrors the migrations in the `migration` crate: a `player` table and a
//! `player_skill` table owned by it through a cascading foreign key.

pub mod prelude;

pub mod player;
pub mod player_skill;
