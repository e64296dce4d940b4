use super::*;

/// Tests a partial update of a user.
///
/// Expected: Ok(Some(user)) with the new address and unchanged name/email
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_apartment_user(db).await?;

    let repo = ApartmentUserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateApartmentUserParam {
                user_address: Some("mp nagar".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, user.name);
    assert_eq!(updated.user_email, user.user_email);
    assert_eq!(updated.user_address, "mp nagar");

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApartmentUserRepository::new(db);
    let result = repo
        .update(42, UpdateApartmentUserParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
