use super::*;

/// Tests existence check for a stored and an unknown player.
///
/// Expected: true for the stored id, false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);

    assert!(repo.exists(player.id).await?);
    assert!(!repo.exists(player.id + 1).await?);

    Ok(())
}
