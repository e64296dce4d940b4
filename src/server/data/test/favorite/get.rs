use super::*;

/// Tests listing all favorites and favorites of a single user.
///
/// Expected: get_all returns every row, get_by_user_id only that user's rows
#[tokio::test]
async fn lists_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _apartment, first) =
        factory::helpers::create_favorite_with_dependencies(db).await?;
    let other_apartment = factory::create_apartment(db).await?;
    let second = factory::create_favorite(db, user.id, other_apartment.id).await?;
    let (other_user, _, _) = factory::helpers::create_favorite_with_dependencies(db).await?;

    let repo = FavoriteRepository::new(db);

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 3);

    let of_user = repo.get_by_user_id(user.id).await?;
    let ids: Vec<i32> = of_user.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    assert_eq!(repo.get_by_user_id(other_user.id).await?.len(), 1);
    assert!(repo.get_by_user_id(9999).await?.is_empty());

    Ok(())
}
