use super::*;

/// Tests ordering by employee name descending with limit and page.
///
/// Expected: names in reverse alphabetical order, second page holds the rest
#[tokio::test]
async fn orders_by_name_descending_and_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmpCar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["amit", "charu", "bina"] {
        factory::emp_car::EmpCarFactory::new(db)
            .emp_name(name)
            .build()
            .await?;
    }

    let repo = CarRepository::new(db);

    let first = repo.get_paginated(CarPage::new(2, 0)).await?;
    let names: Vec<&str> = first.iter().map(|c| c.emp_name.as_str()).collect();
    assert_eq!(names, vec!["charu", "bina"]);

    let second = repo.get_paginated(CarPage::new(2, 1)).await?;
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].emp_name, "amit");

    Ok(())
}
