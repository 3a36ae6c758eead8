use super::*;

/// Tests deleting a player removes its skills too.
///
/// Expected: Ok(true), with neither player nor skill rows remaining
#[tokio::test]
async fn deletes_player_and_skills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (player, _) =
        factory::create_player_with_skills(db, "midfielder", &[("speed", 60), ("stamina", 80)])
            .await?;
    let (other, _) = factory::create_player_with_skills(db, "forward", &[("attack", 20)]).await?;

    let repo = PlayerRepository::new(db);
    let deleted = repo.delete(player.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(player.id).await?.is_none());

    // Only the other player's skill remains
    let skills = entity::prelude::PlayerSkill::find().all(db).await?;
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].player_id, other.id);

    Ok(())
}

/// Tests deleting an unknown player.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let deleted = repo.delete(999_999).await?;

    assert!(!deleted);

    Ok(())
}
