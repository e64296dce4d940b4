use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    model::{
        api::ErrorDto,
        company::{CompanyDto, LocationDto},
    },
    server::{
        controller::extract::ApiPath,
        error::AppError,
        model::company::{Company, Location},
        service::company::CompanyService,
        state::AppState,
    },
};

pub static COMPANY_TAG: &str = "company";

#[utoipa::path(
    get,
    path = "/v2/companies",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved companies with their locations", body = Vec<CompanyDto>),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let companies = CompanyService::new(&state.db).list().await?;

    let companies: Vec<CompanyDto> = companies.into_iter().map(Company::into_dto).collect();

    Ok((StatusCode::OK, Json(companies)))
}

#[utoipa::path(
    get,
    path = "/v2/companies/{id}",
    tag = COMPANY_TAG,
    params(
        ("id" = i32, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved company", body = CompanyDto),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn view_company(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::new(&state.db).view(id).await?;

    Ok((StatusCode::OK, Json(company.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v2/companies/{id}/locations",
    tag = COMPANY_TAG,
    params(
        ("id" = i32, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved locations", body = Vec<LocationDto>),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_company_locations(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let locations = CompanyService::new(&state.db).locations(id).await?;

    let locations: Vec<LocationDto> = locations.into_iter().map(Location::into_dto).collect();

    Ok((StatusCode::OK, Json(locations)))
}
