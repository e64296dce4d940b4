use super::*;

/// Tests updating and deleting a car.
///
/// Expected: updated model re-read, then gone after delete
#[tokio::test]
async fn updates_then_deletes_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmpCar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_emp_car(db).await?;

    let repo = CarRepository::new(db);
    let updated = repo
        .update(
            car.id,
            UpdateCarParam {
                car_model: Some("nexon".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.car_model, "nexon");
    assert_eq!(updated.emp_name, car.emp_name);

    let unchanged = repo
        .update(car.id, UpdateCarParam::default())
        .await?
        .unwrap();
    assert_eq!(unchanged, updated);

    repo.delete(car.id).await?;
    assert!(repo.find_by_id(car.id).await?.is_none());
    assert!(repo
        .update(car.id, UpdateCarParam::default())
        .await?
        .is_none());

    Ok(())
}
