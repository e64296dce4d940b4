use super::*;

/// Tests the case-insensitive duplicate check.
///
/// Expected: true when either the name or the number matches ignoring case
#[tokio::test]
async fn detects_existing_name_or_number_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmpCar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    repo.create(CreateCarParam {
        emp_name: "Ravi Kumar".to_string(),
        car_number: "MP04-AB-1234".to_string(),
        car_model: "swift".to_string(),
    })
    .await?;

    assert!(repo.name_or_number_exists("ravi kumar", "x").await?);
    assert!(repo.name_or_number_exists("someone", "mp04-ab-1234").await?);
    assert!(!repo.name_or_number_exists("someone", "mp04-zz-0000").await?);

    Ok(())
}

/// Tests that values are stored exactly as given.
///
/// Expected: original casing preserved
#[tokio::test]
async fn stores_values_as_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmpCar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let car = repo
        .create(CreateCarParam {
            emp_name: "Ravi Kumar".to_string(),
            car_number: "MP04-AB-1234".to_string(),
            car_model: "Swift".to_string(),
        })
        .await?;

    let found = repo.find_by_id(car.id).await?.unwrap();
    assert_eq!(found.emp_name, "Ravi Kumar");
    assert_eq!(found.car_number, "MP04-AB-1234");

    Ok(())
}
