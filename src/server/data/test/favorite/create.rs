use super::*;

/// Tests adding a favorite and checking for its existence.
///
/// Expected: Ok(Favorite) and exists() true only for that pair
#[tokio::test]
async fn creates_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_apartment_user(db).await?;
    let apartment = factory::create_apartment(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo.create(user.id, apartment.id).await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.apartment_id, apartment.id);
    assert!(repo.exists(user.id, apartment.id).await?);
    assert!(!repo.exists(user.id, apartment.id + 1).await?);

    Ok(())
}
