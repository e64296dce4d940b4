use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    model::{
        api::ErrorDto,
        car::{CarDto, CarPageDto, CreateCarDto, UpdateCarDto},
    },
    server::{
        controller::{
            extract::{ApiJson, ApiPath, ApiQuery},
            param::CarListParam,
        },
        error::AppError,
        model::car::{Car, CarPage, CreateCarParam, UpdateCarParam},
        service::car::CarService,
        state::AppState,
    },
};

pub static CAR_TAG: &str = "car";

#[utoipa::path(
    post,
    path = "/v2/car",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 200, description = "Successfully created car", body = CarDto),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 409, description = "Employee name or car number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_car(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): ApiJson<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db)
        .create(CreateCarParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Lists one page of cars ordered by employee name, descending.
#[utoipa::path(
    get,
    path = "/v2/car",
    tag = CAR_TAG,
    params(CarListParam),
    responses(
        (status = 200, description = "Successfully retrieved cars", body = CarPageDto),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_cars(
    State(state): State<AppState>,
    WithRejection(Query(params), _): ApiQuery<CarListParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = CarPage::from(params);

    let cars = CarService::new(&state.db).list(page).await?;

    Ok((
        StatusCode::OK,
        Json(CarPageDto {
            emp_car: cars.into_iter().map(Car::into_dto).collect(),
            page: page.page,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/v2/car/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved car", body = CarDto),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn view_car(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db).view(id).await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/v2/car/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Successfully updated car", body = CarDto),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_car(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i32>,
    WithRejection(Json(payload), _): ApiJson<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db)
        .update(id, UpdateCarParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/v2/car/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted car"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    CarService::new(&state.db).delete(id).await?;

    Ok(StatusCode::OK)
}
