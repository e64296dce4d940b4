use super::*;

/// Tests listing apartments without filters.
///
/// Verifies ordering by ID and that soft-deleted apartments are skipped.
///
/// Expected: Ok(vec) containing only live apartments in insertion order
#[tokio::test]
async fn lists_live_apartments_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_apartment(db).await?;
    factory::apartment::ApartmentFactory::new(db)
        .deleted(true)
        .build()
        .await?;
    let third = factory::create_apartment(db).await?;

    let repo = ApartmentRepository::new(db);
    let apartments = repo
        .get_paginated(window(10, 0), ApartmentFilter::default())
        .await?;

    let ids: Vec<i32> = apartments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

/// Tests limit and offset.
///
/// Expected: Ok(vec) with the second and third apartments
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..4 {
        created.push(factory::create_apartment(db).await?);
    }

    let repo = ApartmentRepository::new(db);
    let apartments = repo
        .get_paginated(window(2, 1), ApartmentFilter::default())
        .await?;

    let ids: Vec<i32> = apartments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![created[1].id, created[2].id]);

    Ok(())
}

/// Tests equality filters.
///
/// Verifies that non-zero filter fields restrict the result and zero fields are ignored.
///
/// Expected: Ok(vec) with only the matching apartment
#[tokio::test]
async fn filters_by_non_zero_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::apartment::ApartmentFactory::new(db)
        .number_of_rooms(4)
        .price_per_month(25000.0)
        .build()
        .await?;
    factory::apartment::ApartmentFactory::new(db)
        .number_of_rooms(4)
        .price_per_month(9000.0)
        .build()
        .await?;
    factory::apartment::ApartmentFactory::new(db)
        .number_of_rooms(1)
        .build()
        .await?;

    let repo = ApartmentRepository::new(db);
    let apartments = repo
        .get_paginated(
            window(10, 0),
            ApartmentFilter {
                floor_area: 0.0,
                price_per_month: 25000.0,
                number_of_rooms: 4,
            },
        )
        .await?;

    assert_eq!(apartments.len(), 1);
    assert_eq!(apartments[0].id, target.id);

    let four_rooms = repo
        .get_paginated(
            window(10, 0),
            ApartmentFilter {
                number_of_rooms: 4,
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(four_rooms.len(), 2);

    Ok(())
}
