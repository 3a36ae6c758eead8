use super::*;

/// Tests inserting several skills keeps the submitted order.
///
/// Expected: Ok with ascending ids matching input order
#[tokio::test]
async fn inserts_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerSkillRepository::new(db);
    let skills = repo
        .create_many(
            player.id,
            &[
                SkillParam {
                    skill: SkillKind::Stamina,
                    value: 1,
                },
                SkillParam {
                    skill: SkillKind::Defense,
                    value: 2,
                },
                SkillParam {
                    skill: SkillKind::Stamina,
                    value: 3,
                },
            ],
        )
        .await?;

    assert_eq!(skills.len(), 3);
    assert_eq!(skills[0].skill, SkillKind::Stamina);
    assert_eq!(skills[1].skill, SkillKind::Defense);
    assert_eq!(skills[2].value, 3);
    assert!(skills[0].id < skills[1].id && skills[1].id < skills[2].id);

    Ok(())
}

/// Tests a skill cannot reference a missing player.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_nonexistent_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerSkillRepository::new(db);
    let result = repo
        .create_many(
            999_999,
            &[SkillParam {
                skill: SkillKind::Attack,
                value: 1,
            }],
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
