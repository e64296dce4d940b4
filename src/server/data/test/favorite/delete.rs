use super::*;

/// Tests removing a favorite pair.
///
/// Expected: one row removed, then zero rows on a repeated delete
#[tokio::test]
async fn deletes_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, apartment, _favorite) =
        factory::helpers::create_favorite_with_dependencies(db).await?;

    let repo = FavoriteRepository::new(db);
    assert_eq!(repo.delete(user.id, apartment.id).await?, 1);
    assert_eq!(repo.delete(user.id, apartment.id).await?, 0);
    assert!(!repo.exists(user.id, apartment.id).await?);

    Ok(())
}
