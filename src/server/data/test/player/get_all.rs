use super::*;

/// Tests listing players returns each with its own skills ordered by id.
///
/// Verifies that skills loaded in a single query are grouped back onto the
/// correct owner and that players come back in id order.
///
/// Expected: Ok with two players, each holding only its own skills
#[tokio::test]
async fn returns_players_with_their_skills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) =
        factory::create_player_with_skills(db, "forward", &[("attack", 90), ("speed", 40)])
            .await?;
    let (second, _) = factory::create_player_with_skills(db, "defender", &[("defense", 70)]).await?;

    let repo = PlayerRepository::new(db);
    let players = repo.get_all().await?;

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].id, first.id);
    assert_eq!(players[1].id, second.id);
    assert_eq!(players[0].skills.len(), 2);
    assert_eq!(players[0].skills[0].skill, SkillKind::Attack);
    assert_eq!(players[0].skills[1].skill, SkillKind::Speed);
    assert_eq!(players[1].skills.len(), 1);
    assert_eq!(players[1].skills[0].skill, SkillKind::Defense);

    Ok(())
}

/// Tests listing an empty roster.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let players = repo.get_all().await?;

    assert!(players.is_empty());

    Ok(())
}

/// Tests a stored position outside the enumeration surfaces as a data error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .position("goalkeeper")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let result = repo.get_all().await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests listing a roster larger than the bound-parameter limit.
///
/// Expected: Ok with every player, skills still attached to their owner
#[tokio::test]
async fn returns_large_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    insert_players(db, "forward", LARGE_ROSTER).await?;
    let (last, _) = factory::create_player_with_skills(db, "defender", &[("defense", 70)]).await?;

    let players = PlayerRepository::new(db).get_all().await?;

    assert_eq!(players.len(), LARGE_ROSTER + 1);
    assert!(players[0].skills.is_empty());
    assert_eq!(players[LARGE_ROSTER].id, last.id);
    assert_eq!(players[LARGE_ROSTER].skills.len(), 1);

    Ok(())
}
