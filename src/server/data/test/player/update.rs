use super::*;

/// Tests updating a player replaces name, position and the whole skill set.
///
/// Verifies that no skill row from before the update survives and that the
/// new skills are stored in the submitted order.
///
/// Expected: Ok(Some) with new fields and only the new skills
#[tokio::test]
async fn replaces_fields_and_skills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (player, old_skills) =
        factory::create_player_with_skills(db, "forward", &[("attack", 90), ("speed", 40)])
            .await?;

    let repo = PlayerRepository::new(db);
    let result = repo
        .update(UpdatePlayerParams {
            id: player.id,
            name: "renamed".to_string(),
            position: Position::Defender,
            skills: vec![SkillParam {
                skill: SkillKind::Strength,
                value: 55,
            }],
        })
        .await?;

    assert!(result.is_some());
    let updated = result.unwrap();
    assert_eq!(updated.id, player.id);
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.position, Position::Defender);
    assert_eq!(updated.skills.len(), 1);
    assert_eq!(updated.skills[0].skill, SkillKind::Strength);
    assert!(old_skills.iter().all(|old| old.id != updated.skills[0].id));

    // Verify the stored state matches
    let stored = repo.get_by_id(player.id).await?.unwrap();
    assert_eq!(stored, updated);

    let skill_count = entity::prelude::PlayerSkill::find().count(db).await?;
    assert_eq!(skill_count, 1);

    Ok(())
}

/// Tests updating an unknown player writes nothing.
///
/// Expected: Ok(None) and no skill rows inserted
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo
        .update(UpdatePlayerParams {
            id: 999_999,
            name: "ghost".to_string(),
            position: Position::Forward,
            skills: vec![SkillParam {
                skill: SkillKind::Attack,
                value: 1,
            }],
        })
        .await?;

    assert!(result.is_none());
    let skill_count = entity::prelude::PlayerSkill::find().count(db).await?;
    assert_eq!(skill_count, 0);

    Ok(())
}
