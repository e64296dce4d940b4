use super::*;

/// Tests a partial update.
///
/// Verifies that only provided fields change and updated_at moves forward.
///
/// Expected: Ok(Some(apartment)) with new price and untouched name
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let apartment = factory::apartment::ApartmentFactory::new(db)
        .name("Original")
        .build()
        .await?;

    let repo = ApartmentRepository::new(db);
    let updated = repo
        .update(
            apartment.id,
            UpdateApartmentParam {
                price_per_month: Some(15000.0),
                geolocation: Some(Geolocation {
                    lat: 1.5,
                    long: 2.5,
                }),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Original");
    assert_eq!(updated.price_per_month, 15000.0);
    assert_eq!(updated.geolocation, Geolocation { lat: 1.5, long: 2.5 });
    assert!(updated.updated_at >= apartment.updated_at);

    Ok(())
}

/// Tests updating a missing or soft-deleted apartment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_apartment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::apartment::ApartmentFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = ApartmentRepository::new(db);
    assert!(repo
        .update(999, UpdateApartmentParam::default())
        .await?
        .is_none());
    assert!(repo
        .update(deleted.id, UpdateApartmentParam::default())
        .await?
        .is_none());

    Ok(())
}
