use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    model::{
        api::ErrorDto,
        apartment::{ApartmentDto, CreateApartmentDto, UpdateApartmentDto},
    },
    server::{
        cache::{invalidate, key, read_through},
        controller::{
            extract::{ApiJson, ApiPath, ApiQuery},
            param::ApartmentListParam,
        },
        error::AppError,
        middleware::auth::AuthUser,
        model::apartment::{Apartment, CreateApartmentParam, UpdateApartmentParam},
        service::apartment::ApartmentService,
        state::AppState,
    },
};

pub static APARTMENT_TAG: &str = "apartment";

#[utoipa::path(
    post,
    path = "/v2/apartments",
    tag = APARTMENT_TAG,
    request_body = CreateApartmentDto,
    responses(
        (status = 200, description = "Successfully created apartment", body = ApartmentDto),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 409, description = "An apartment with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_apartment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    WithRejection(Json(payload), _): ApiJson<CreateApartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let apartment = ApartmentService::new(&state.db)
        .create(CreateApartmentParam::from(payload))
        .await?;
    tracing::info!(apartment_id = apartment.id, user = %caller.name, "apartment created");

    invalidate(state.cache.as_ref(), &[], &[key::APARTMENT_LIST_PREFIX]).await?;

    Ok((StatusCode::OK, Json(apartment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v2/apartments",
    tag = APARTMENT_TAG,
    params(ApartmentListParam),
    responses(
        (status = 200, description = "Successfully retrieved apartments", body = Vec<ApartmentDto>),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_apartments(
    State(state): State<AppState>,
    WithRejection(Query(params), _): ApiQuery<ApartmentListParam>,
) -> Result<impl IntoResponse, AppError> {
    let pagination = params.pagination()?;
    let filter = params.filter();
    let cache_key = key::apartment_list(pagination, filter);

    let apartments: Vec<ApartmentDto> = read_through(state.cache.as_ref(), &cache_key, || async {
        let apartments = ApartmentService::new(&state.db)
            .list(pagination, filter)
            .await?;

        Ok::<_, AppError>(apartments.into_iter().map(Apartment::into_dto).collect())
    })
    .await?;

    Ok((StatusCode::OK, Json(apartments)))
}

#[utoipa::path(
    get,
    path = "/v2/apartments/{id}",
    tag = APARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Apartment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved apartment", body = ApartmentDto),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn view_apartment(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cache_key = key::apartment(id);

    let apartment: ApartmentDto = read_through(state.cache.as_ref(), &cache_key, || async {
        let apartment = ApartmentService::new(&state.db).view(id).await?;

        Ok::<_, AppError>(apartment.into_dto())
    })
    .await?;

    Ok((StatusCode::OK, Json(apartment)))
}

#[utoipa::path(
    patch,
    path = "/v2/apartments/{id}",
    tag = APARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Apartment ID")
    ),
    request_body = UpdateApartmentDto,
    responses(
        (status = 200, description = "Successfully updated apartment", body = ApartmentDto),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_apartment(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i32>,
    WithRejection(Json(payload), _): ApiJson<UpdateApartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let apartment = ApartmentService::new(&state.db)
        .update(id, UpdateApartmentParam::from(payload))
        .await?;

    invalidate(
        state.cache.as_ref(),
        &[key::apartment(id)],
        &[key::APARTMENT_LIST_PREFIX],
    )
    .await?;

    Ok((StatusCode::OK, Json(apartment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/v2/apartments/{id}",
    tag = APARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Apartment ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted apartment"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_apartment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    WithRejection(Path(id), _): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    ApartmentService::new(&state.db).delete(id).await?;
    tracing::info!(apartment_id = id, user = %caller.name, "apartment deleted");

    invalidate(
        state.cache.as_ref(),
        &[key::apartment(id)],
        &[key::APARTMENT_LIST_PREFIX],
    )
    .await?;

    Ok(StatusCode::OK)
}
