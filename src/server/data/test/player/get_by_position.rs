use super::*;

/// Tests filtering players by position.
///
/// Verifies that only players at the requested position are returned, in id
/// order, with their skills attached.
///
/// Expected: Ok with the two forwards only
#[tokio::test]
async fn returns_only_matching_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (a, _) = factory::create_player_with_skills(db, "forward", &[("attack", 90)]).await?;
    factory::create_player_with_skills(db, "defender", &[("defense", 99)]).await?;
    let (c, _) = factory::create_player_with_skills(db, "forward", &[("speed", 70)]).await?;

    let repo = PlayerRepository::new(db);
    let forwards = repo.get_by_position(Position::Forward).await?;

    assert_eq!(forwards.len(), 2);
    assert_eq!(forwards[0].id, a.id);
    assert_eq!(forwards[1].id, c.id);
    assert!(forwards.iter().all(|p| p.position == Position::Forward));
    assert_eq!(forwards[1].skills[0].skill, SkillKind::Speed);

    Ok(())
}

/// Tests filtering by a position nobody plays.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_no_player_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player_with_skills(db, "forward", &[("attack", 90)]).await?;

    let repo = PlayerRepository::new(db);
    let midfielders = repo.get_by_position(Position::Midfielder).await?;

    assert!(midfielders.is_empty());

    Ok(())
}

/// Tests filtering a position holding more players than the bound-parameter limit.
///
/// Expected: Ok with every player at that position and none from others
#[tokio::test]
async fn returns_large_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    insert_players(db, "forward", LARGE_ROSTER).await?;
    factory::create_player_with_skills(db, "defender", &[("defense", 70)]).await?;

    let players = PlayerRepository::new(db)
        .get_by_position(Position::Forward)
        .await?;

    assert_eq!(players.len(), LARGE_ROSTER);
    assert!(players.iter().all(|p| p.position == Position::Forward));

    Ok(())
}
