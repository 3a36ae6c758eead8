//! Roster Test Utils
//!
//! Shared testing utilities for the roster service. The crate offers a builder for test
//! contexts backed by in-memory SQLite databases, plus factories that insert entities with
//! sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for `player` and `player_skill` rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_player_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let player = factory::create_player(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
