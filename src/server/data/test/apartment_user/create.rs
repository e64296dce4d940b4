use super::*;

/// Tests creating an apartment user.
///
/// Expected: Ok(ApartmentUser) that is found by ID afterwards
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApartmentUserRepository::new(db);
    let user = repo
        .create(CreateApartmentUserParam {
            name: "karan".to_string(),
            user_email: "karan@example.com".to_string(),
            user_address: "arera".to_string(),
        })
        .await?;

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found, user);
    assert!(repo.name_exists("karan").await?);

    Ok(())
}

/// Tests that soft-deleted users are invisible to lookups.
///
/// Expected: find_by_id returns None and the name is free again
#[tokio::test]
async fn soft_deleted_user_is_hidden() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::apartment_user::ApartmentUserFactory::new(db)
        .name("leaving")
        .build()
        .await?;

    let repo = ApartmentUserRepository::new(db);
    repo.soft_delete(user.id).await?;

    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(!repo.name_exists("leaving").await?);

    Ok(())
}
