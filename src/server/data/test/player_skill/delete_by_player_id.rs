use super::*;

/// Tests deleting a player's skills leaves other players untouched.
///
/// Expected: Ok(2), with the other player's skill still stored
#[tokio::test]
async fn deletes_only_owner_skills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (player, _) =
        factory::create_player_with_skills(db, "defender", &[("defense", 90), ("speed", 70)])
            .await?;
    let (other, _) = factory::create_player_with_skills(db, "forward", &[("attack", 10)]).await?;

    let repo = PlayerSkillRepository::new(db);
    let removed = repo.delete_by_player_id(player.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_by_player_id(player.id).await?.is_empty());
    assert_eq!(repo.get_by_player_id(other.id).await?.len(), 1);

    Ok(())
}
