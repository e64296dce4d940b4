use super::*;

/// Tests soft deletion.
///
/// Verifies the row is kept with deleted_at stamped and is no longer found.
///
/// Expected: Ok(()) and find_by_id returns None
#[tokio::test]
async fn hides_apartment_but_keeps_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let apartment = factory::create_apartment(db).await?;

    let repo = ApartmentRepository::new(db);
    repo.soft_delete(apartment.id).await?;

    assert!(repo.find_by_id(apartment.id).await?.is_none());
    let stored = entity::prelude::Apartment::find_by_id(apartment.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_some());

    Ok(())
}
