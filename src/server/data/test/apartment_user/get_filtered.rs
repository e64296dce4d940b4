use super::*;

/// Tests listing users without filters.
///
/// Expected: every live user ordered by ID
#[tokio::test]
async fn empty_filter_returns_all_live_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_apartment_user(db).await?;
    let second = factory::create_apartment_user(db).await?;
    factory::apartment_user::ApartmentUserFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = ApartmentUserRepository::new(db);
    let users = repo.get_filtered(&ApartmentUserFilter::default()).await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests filtering by name and email.
///
/// Expected: only users matching every non-empty filter
#[tokio::test]
async fn filters_by_name_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let karan = factory::apartment_user::ApartmentUserFactory::new(db)
        .name("karan")
        .user_email("karan@example.com")
        .build()
        .await?;
    factory::apartment_user::ApartmentUserFactory::new(db)
        .name("karan")
        .user_email("other@example.com")
        .build()
        .await?;

    let repo = ApartmentUserRepository::new(db);

    let by_name = repo
        .get_filtered(&ApartmentUserFilter {
            name: "karan".to_string(),
            user_email: String::new(),
        })
        .await?;
    assert_eq!(by_name.len(), 2);

    let by_both = repo
        .get_filtered(&ApartmentUserFilter {
            name: "karan".to_string(),
            user_email: "karan@example.com".to_string(),
        })
        .await?;
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].id, karan.id);

    let none = repo
        .get_filtered(&ApartmentUserFilter {
            name: "nobody".to_string(),
            user_email: String::new(),
        })
        .await?;
    assert!(none.is_empty());

    Ok(())
}
