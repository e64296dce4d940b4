use super::*;

/// Tests creating an apartment.
///
/// Verifies that every field, including the geolocation pair, is persisted and
/// that the new apartment is live.
///
/// Expected: Ok(Apartment) with deleted_at unset in the database
#[tokio::test]
async fn creates_apartment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApartmentRepository::new(db);
    let apartment = repo
        .create(CreateApartmentParam {
            name: "Lake View".to_string(),
            description: "Corner flat".to_string(),
            floor_area: 850.0,
            price_per_month: 12000.0,
            number_of_rooms: 2,
            geolocation: Geolocation {
                lat: 23.25,
                long: 77.41,
            },
            associated_realtor: "rahul".to_string(),
        })
        .await?;

    assert_eq!(apartment.name, "Lake View");
    assert_eq!(apartment.geolocation.lat, 23.25);
    assert_eq!(apartment.geolocation.long, 77.41);

    let stored = entity::prelude::Apartment::find_by_id(apartment.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_none());
    assert_eq!(stored.number_of_rooms, 2);

    Ok(())
}

/// Tests that name lookups only consider live apartments.
///
/// Expected: true for a live name, false for a soft-deleted one
#[tokio::test]
async fn name_exists_ignores_deleted_apartments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::apartment::ApartmentFactory::new(db)
        .name("Live")
        .build()
        .await?;
    factory::apartment::ApartmentFactory::new(db)
        .name("Gone")
        .deleted(true)
        .build()
        .await?;

    let repo = ApartmentRepository::new(db);
    assert!(repo.name_exists("Live").await?);
    assert!(!repo.name_exists("Gone").await?);
    assert!(!repo.name_exists("Unknown").await?);

    Ok(())
}
