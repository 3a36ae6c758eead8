use super::*;

/// Tests creating a player with several skills.
///
/// Verifies that the repository inserts the player row and one skill row per
/// parameter, returning them in the order they were given.
///
/// Expected: Ok with player and skills created
#[tokio::test]
async fn creates_player_with_skills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(CreatePlayerParams {
            name: "player name".to_string(),
            position: Position::Midfielder,
            skills: vec![
                SkillParam {
                    skill: SkillKind::Attack,
                    value: 60,
                },
                SkillParam {
                    skill: SkillKind::Speed,
                    value: 80,
                },
            ],
        })
        .await?;

    assert_eq!(player.name, "player name");
    assert_eq!(player.position, Position::Midfielder);
    assert_eq!(player.skills.len(), 2);
    assert_eq!(player.skills[0].skill, SkillKind::Attack);
    assert_eq!(player.skills[0].value, 60);
    assert_eq!(player.skills[1].skill, SkillKind::Speed);
    assert!(player.skills.iter().all(|s| s.player_id == player.id));
    assert!(player.skills[0].id < player.skills[1].id);

    // Verify rows exist in database
    let stored = entity::prelude::Player::find_by_id(player.id).one(db).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().position, "midfielder");

    let skill_count = entity::prelude::PlayerSkill::find().count(db).await?;
    assert_eq!(skill_count, 2);

    Ok(())
}

/// Tests creating two players assigns distinct ids.
///
/// Expected: Ok with different player ids
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let params = CreatePlayerParams {
        name: "twin".to_string(),
        position: Position::Defender,
        skills: vec![SkillParam {
            skill: SkillKind::Defense,
            value: 10,
        }],
    };

    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
