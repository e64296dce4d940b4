use chrono::Utc;

use crate::model::apartment::GeolocationDto;

use super::*;

fn new_apartment(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Corner flat",
        "floor_area": 850.0,
        "price_per_month": 15000.0,
        "number_of_rooms": 2,
        "geolocation_coordinates": { "lat": 23.25, "long": 77.41 },
        "associated_realtor": "asha"
    })
}

/// Tests creating an apartment through the API.
///
/// Expected: 200 with the stored apartment
#[tokio::test]
async fn create_returns_apartment() {
    let app = TestApp::new().await;

    let response = app
        .authed(Method::POST, "/v2/apartments", Some(new_apartment("Lake View")))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let apartment: ApartmentDto = body_json(response).await;
    assert_eq!(apartment.name, "Lake View");
    assert_eq!(apartment.number_of_rooms, 2);
    assert_eq!(
        apartment.geolocation_coordinates,
        GeolocationDto {
            lat: 23.25,
            long: 77.41
        }
    );
}

/// Tests that a second apartment with the same name is rejected.
///
/// Expected: 409 with the duplicate-name message
#[tokio::test]
async fn create_duplicate_name_conflicts() {
    let app = TestApp::new().await;
    factory::apartment::ApartmentFactory::new(app.db())
        .name("Lake View")
        .build()
        .await
        .unwrap();

    let response = app
        .authed(Method::POST, "/v2/apartments", Some(new_apartment("Lake View")))
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(error_message(response).await, "name already exist.");
}

/// Tests that listing stores the page under a key derived from the query.
///
/// Expected: list returned and cached under the default pagination key
#[tokio::test]
async fn list_populates_cache() {
    let app = TestApp::new().await;
    factory::create_apartment(app.db()).await.unwrap();
    factory::create_apartment(app.db()).await.unwrap();

    let response = app.authed(Method::GET, "/v2/apartments", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let apartments: Vec<ApartmentDto> = body_json(response).await;
    assert_eq!(apartments.len(), 2);
    assert!(app.cached("apartments:list:10:0:0:0:0").await.is_some());
}

/// Tests that list query parameters filter and paginate.
///
/// Expected: only apartments with the requested room count, limited to one
#[tokio::test]
async fn list_applies_filter_and_limit() {
    let app = TestApp::new().await;
    factory::apartment::ApartmentFactory::new(app.db())
        .number_of_rooms(4)
        .build()
        .await
        .unwrap();
    factory::apartment::ApartmentFactory::new(app.db())
        .number_of_rooms(4)
        .build()
        .await
        .unwrap();
    factory::apartment::ApartmentFactory::new(app.db())
        .number_of_rooms(1)
        .build()
        .await
        .unwrap();

    let response = app
        .authed(Method::GET, "/v2/apartments?noOfRooms=4&limit=1", None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let apartments: Vec<ApartmentDto> = body_json(response).await;
    assert_eq!(apartments.len(), 1);
    assert_eq!(apartments[0].number_of_rooms, 4);
}

/// Tests that a cached apartment is served without reading the database.
///
/// Expected: the seeded cache entry is returned for an id absent from the database
#[tokio::test]
async fn view_serves_cache_hit() {
    let app = TestApp::new().await;
    let now = Utc::now();
    let seeded = ApartmentDto {
        id: 999,
        name: "Cached".to_string(),
        description: String::new(),
        floor_area: 500.0,
        price_per_month: 9000.0,
        number_of_rooms: 1,
        geolocation_coordinates: GeolocationDto { lat: 0.0, long: 0.0 },
        associated_realtor: String::new(),
        created_at: now,
        updated_at: now,
    };
    app.cache
        .set(&key::apartment(999), serde_json::to_string(&seeded).unwrap())
        .await
        .unwrap();

    let response = app.authed(Method::GET, "/v2/apartments/999", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let apartment: ApartmentDto = body_json(response).await;
    assert_eq!(apartment, seeded);
}

/// Tests viewing an apartment that does not exist.
///
/// Expected: 404 and nothing cached
#[tokio::test]
async fn view_missing_is_not_found() {
    let app = TestApp::new().await;

    let response = app.authed(Method::GET, "/v2/apartments/42", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "Apartment Id not exist.");
    assert!(app.cached(&key::apartment(42)).await.is_none());
}

/// Tests that a non-numeric id is rejected before reaching the handler.
///
/// Expected: 400 with a JSON error body
#[tokio::test]
async fn view_with_invalid_id_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.authed(Method::GET, "/v2/apartments/abc", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!error_message(response).await.is_empty());
}

/// Tests a create body missing a required field.
///
/// Expected: 400 with a JSON error body naming the field
#[tokio::test]
async fn create_with_missing_field_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .authed(
            Method::POST,
            "/v2/apartments",
            Some(json!({ "name": "Lake View", "floor_area": 850.0 })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("price_per_month"));
}

/// Tests that updating an apartment drops its cached view and cached lists.
///
/// Expected: updated apartment returned, both cache entries removed
#[tokio::test]
async fn update_invalidates_cache() {
    let app = TestApp::new().await;
    let apartment = factory::create_apartment(app.db()).await.unwrap();
    let uri = format!("/v2/apartments/{}", apartment.id);

    app.authed(Method::GET, &uri, None).await;
    app.authed(Method::GET, "/v2/apartments", None).await;
    assert!(app.cached(&key::apartment(apartment.id)).await.is_some());
    assert!(app.cached("apartments:list:10:0:0:0:0").await.is_some());

    let response = app
        .authed(
            Method::PATCH,
            &uri,
            Some(json!({ "price_per_month": 20000.0 })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated: ApartmentDto = body_json(response).await;
    assert_eq!(updated.price_per_month, 20000.0);
    assert_eq!(updated.name, apartment.name);
    assert!(app.cached(&key::apartment(apartment.id)).await.is_none());
    assert!(app.cached("apartments:list:10:0:0:0:0").await.is_none());

    let response = app.authed(Method::GET, &uri, None).await;
    let fresh: ApartmentDto = body_json(response).await;
    assert_eq!(fresh.price_per_month, 20000.0);
}

/// Tests that deleting an apartment hides it from later reads.
///
/// Expected: 200 with an empty body, then 404 on view
#[tokio::test]
async fn delete_then_view_is_not_found() {
    let app = TestApp::new().await;
    let apartment = factory::create_apartment(app.db()).await.unwrap();
    let uri = format!("/v2/apartments/{}", apartment.id);
    app.authed(Method::GET, &uri, None).await;

    let response = app.authed(Method::DELETE, &uri, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
    assert!(app.cached(&key::apartment(apartment.id)).await.is_none());

    let response = app.authed(Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests deleting an apartment that does not exist.
///
/// Expected: 404
#[tokio::test]
async fn delete_missing_is_not_found() {
    let app = TestApp::new().await;

    let response = app.authed(Method::DELETE, "/v2/apartments/7", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests an offset too large for the database.
///
/// Expected: 400 with a JSON error body
#[tokio::test]
async fn list_with_oversized_offset_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .authed(
            Method::GET,
            "/v2/apartments?offset=18446744073709551615",
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("offset"));
}
