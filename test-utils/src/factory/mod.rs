//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Positions and skills are
//! passed as their lowercase storage names.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::create_player(&db).await?;
//! let skill = factory::create_player_skill(&db, player.id, "attack", 80).await?;
//!
//! let (player, skills) =
//!     factory::helpers::create_player_with_skills(&db, "forward", &[("attack", 90)]).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let player = factory::player::PlayerFactory::new(&db)
//!     .name("Striker")
//!     .position("forward")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - Create player entities
//! - `player_skill` - Create skill rows owned by a player
//! - `helpers` - Counter and multi-entity conveniences

pub mod helpers;
pub mod player;
pub mod player_skill;

pub use helpers::create_player_with_skills;
pub use player::create_player;
pub use player_skill::create_player_skill;
