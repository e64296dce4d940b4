use super::*;

/// Tests listing companies with their locations.
///
/// Expected: every company carries its own locations
#[tokio::test]
async fn list_includes_locations() {
    let app = TestApp::new().await;
    let (company, _) = factory::helpers::create_company_with_locations(app.db(), 2)
        .await
        .unwrap();
    factory::create_company(app.db()).await.unwrap();

    let response = app.authed(Method::GET, "/v2/companies", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let companies: Vec<CompanyDto> = body_json(response).await;
    assert_eq!(companies.len(), 2);
    assert_eq!(companies[0].id, company.id);
    assert_eq!(companies[0].locations.len(), 2);
    assert!(companies[1].locations.is_empty());
}

/// Tests the locations endpoint of one company.
///
/// Expected: 200 with the company's locations
#[tokio::test]
async fn locations_of_company() {
    let app = TestApp::new().await;
    let (company, locations) = factory::helpers::create_company_with_locations(app.db(), 3)
        .await
        .unwrap();

    let response = app
        .authed(
            Method::GET,
            &format!("/v2/companies/{}/locations", company.id),
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<Value> = body_json(response).await;
    assert_eq!(body.len(), locations.len());
}

/// Tests viewing a company that does not exist.
///
/// Expected: 404 with the missing-company message, also for its locations
#[tokio::test]
async fn missing_company_is_not_found() {
    let app = TestApp::new().await;

    let response = app.authed(Method::GET, "/v2/companies/77", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "company Id not exist.");

    let response = app
        .authed(Method::GET, "/v2/companies/77/locations", None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
