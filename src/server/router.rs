use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        apartment::{ApartmentDto, CreateApartmentDto, GeolocationDto, UpdateApartmentDto},
        apartment_user::{ApartmentUserDto, CreateApartmentUserDto, UpdateApartmentUserDto},
        car::{CarDto, CarPageDto, CreateCarDto, UpdateCarDto},
        company::{CompanyDto, LocationDto},
        favorite::{CreateFavoriteDto, FavoriteDto},
    },
    server::{
        controller::{
            apartment::{
                self, create_apartment, delete_apartment, list_apartments, update_apartment,
                view_apartment, APARTMENT_TAG,
            },
            apartment_user::{
                self, create_apartment_user, delete_apartment_user, list_apartment_users,
                update_apartment_user, view_apartment_user, APARTMENT_USER_TAG,
            },
            car::{self, create_car, delete_car, list_cars, update_car, view_car, CAR_TAG},
            company::{
                self, list_companies, list_company_locations, view_company, COMPANY_TAG,
            },
            favorite::{
                self, add_favorite, delete_favorite, list_favorites, view_favorites,
                FAVORITE_TAG,
            },
            health::{self, health, HEALTH_TAG},
        },
        middleware::auth::require_bearer,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Rental API", description = "Apartments, apartment users, favorites, cars and companies"),
    paths(
        health::health,
        apartment::create_apartment,
        apartment::list_apartments,
        apartment::view_apartment,
        apartment::update_apartment,
        apartment::delete_apartment,
        apartment_user::create_apartment_user,
        apartment_user::list_apartment_users,
        apartment_user::view_apartment_user,
        apartment_user::update_apartment_user,
        apartment_user::delete_apartment_user,
        favorite::add_favorite,
        favorite::list_favorites,
        favorite::view_favorites,
        favorite::delete_favorite,
        car::create_car,
        car::list_cars,
        car::view_car,
        car::update_car,
        car::delete_car,
        company::list_companies,
        company::view_company,
        company::list_company_locations,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        GeolocationDto,
        ApartmentDto,
        CreateApartmentDto,
        UpdateApartmentDto,
        ApartmentUserDto,
        CreateApartmentUserDto,
        UpdateApartmentUserDto,
        FavoriteDto,
        CreateFavoriteDto,
        CarDto,
        CarPageDto,
        CreateCarDto,
        UpdateCarDto,
        CompanyDto,
        LocationDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = HEALTH_TAG, description = "Liveness"),
        (name = APARTMENT_TAG, description = "Apartment listings"),
        (name = APARTMENT_USER_TAG, description = "Apartment users and registration"),
        (name = FAVORITE_TAG, description = "Favorite apartments of users"),
        (name = CAR_TAG, description = "Employee cars"),
        (name = COMPANY_TAG, description = "Companies and their locations"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by the protected operations.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// Builds the complete application router.
///
/// Everything under `/v2` requires a bearer token except user registration, which is
/// the operation handing tokens out.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/v2/apartments", post(create_apartment).get(list_apartments))
        .route(
            "/v2/apartments/{id}",
            get(view_apartment)
                .patch(update_apartment)
                .delete(delete_apartment),
        )
        .route("/v2/apartment_users", get(list_apartment_users))
        .route(
            "/v2/apartment_users/{id}",
            get(view_apartment_user)
                .patch(update_apartment_user)
                .delete(delete_apartment_user),
        )
        .route(
            "/v2/favorites",
            post(add_favorite)
                .get(list_favorites)
                .delete(delete_favorite),
        )
        .route("/v2/favorites/{user_id}", get(view_favorites))
        .route("/v2/car", post(create_car).get(list_cars))
        .route(
            "/v2/car/{id}",
            get(view_car).patch(update_car).delete(delete_car),
        )
        .route("/v2/companies", get(list_companies))
        .route("/v2/companies/{id}", get(view_company))
        .route("/v2/companies/{id}/locations", get(list_company_locations))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    let public = Router::new()
        .route("/health", get(health))
        .route("/v2/apartment_users", post(create_apartment_user));

    Router::new()
        .merge(protected)
        .merge(public)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
