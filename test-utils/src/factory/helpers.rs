//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter used to give every factory-created entity a unique default name.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a player at the given position together with its skill rows.
///
/// Skill rows are inserted in slice order, so their ids follow the same order.
///
/// # Arguments
/// - `db` - Database connection
/// - `position` - Lowercase position name
/// - `skills` - `(skill, value)` pairs to attach to the player
///
/// # Returns
/// - `Ok((player, skills))` - The created player and its skill rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_player_with_skills(
    db: &DatabaseConnection,
    position: &str,
    skills: &[(&str, i32)],
) -> Result<
    (
        entity::player::Model,
        Vec<entity::player_skill::Model>,
    ),
    DbErr,
> {
    let player = crate::factory::player::PlayerFactory::new(db)
        .position(position)
        .build()
        .await?;

    let mut rows = Vec::with_capacity(skills.len());
    for (skill, value) in skills {
        let row =
            crate::factory::player_skill::create_player_skill(db, player.id, *skill, *value)
                .await?;
        rows.push(row);
    }

    Ok((player, rows))
}
