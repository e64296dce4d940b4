use super::*;

/// Tests listing companies with their locations.
///
/// Expected: each company carries only its own locations, ordered by ID
#[tokio::test]
async fn lists_companies_with_locations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, first_locations) = factory::helpers::create_company_with_locations(db, 2).await?;
    let (second, _) = factory::helpers::create_company_with_locations(db, 1).await?;
    let empty = factory::create_company(db).await?;

    let repo = CompanyRepository::new(db);
    let companies = repo.get_all().await?;

    let ids: Vec<i32> = companies.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id, empty.id]);

    let location_ids: Vec<i32> = companies[0].locations.iter().map(|l| l.id).collect();
    assert_eq!(
        location_ids,
        first_locations.iter().map(|l| l.id).collect::<Vec<_>>()
    );
    assert_eq!(companies[1].locations.len(), 1);
    assert!(companies[2].locations.is_empty());

    Ok(())
}

/// Tests viewing a single company.
///
/// Expected: Some(company) with locations for a known ID, None otherwise
#[tokio::test]
async fn finds_company_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _) = factory::helpers::create_company_with_locations(db, 2).await?;

    let repo = CompanyRepository::new(db);
    let found = repo.find_by_id(company.id).await?.unwrap();

    assert_eq!(found.name, company.name);
    assert_eq!(found.locations.len(), 2);
    assert!(repo.find_by_id(company.id + 100).await?.is_none());

    Ok(())
}

/// Tests listing the locations of one company.
///
/// Expected: only that company's locations
#[tokio::test]
async fn lists_locations_of_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _) = factory::helpers::create_company_with_locations(db, 3).await?;
    factory::helpers::create_company_with_locations(db, 1).await?;

    let repo = CompanyRepository::new(db);
    let locations = repo.get_locations(company.id).await?;

    assert_eq!(locations.len(), 3);
    assert!(locations.iter().all(|l| l.company_id == company.id));

    Ok(())
}
