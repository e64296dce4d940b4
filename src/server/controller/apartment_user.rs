use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::{
    cookie::{Cookie, CookieJar},
    WithRejection,
};
use time::{Duration, OffsetDateTime};

use crate::{
    model::{
        api::ErrorDto,
        apartment_user::{ApartmentUserDto, CreateApartmentUserDto, UpdateApartmentUserDto},
    },
    server::{
        cache::{invalidate, key, read_through},
        controller::{
            extract::{ApiJson, ApiPath, ApiQuery},
            param::ApartmentUserListParam,
        },
        error::AppError,
        model::apartment_user::{
            ApartmentUser, ApartmentUserFilter, CreateApartmentUserParam,
            UpdateApartmentUserParam,
        },
        service::apartment_user::ApartmentUserService,
        state::AppState,
    },
};

pub static APARTMENT_USER_TAG: &str = "apartment_user";

/// Name of the cookie carrying the token issued at registration.
pub const TOKEN_COOKIE: &str = "token";

/// Registers a user and hands out their first token.
///
/// Reachable without a bearer token. The token is returned as the `token` cookie,
/// valid for 24 hours.
#[utoipa::path(
    post,
    path = "/v2/apartment_users",
    tag = APARTMENT_USER_TAG,
    request_body = CreateApartmentUserDto,
    responses(
        (status = 200, description = "Successfully registered user, token set as cookie", body = ApartmentUserDto),
        (status = 409, description = "A user with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_apartment_user(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(payload), _): ApiJson<CreateApartmentUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = ApartmentUserService::new(&state.db)
        .create(CreateApartmentUserParam::from(payload))
        .await?;

    let token = state.jwt.generate_token(&user)?;
    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .expires(OffsetDateTime::now_utc() + Duration::hours(24));

    invalidate(state.cache.as_ref(), &[], &[key::APARTMENT_USER_LIST_PREFIX]).await?;

    Ok((StatusCode::OK, jar.add(cookie), Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v2/apartment_users",
    tag = APARTMENT_USER_TAG,
    params(ApartmentUserListParam),
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<ApartmentUserDto>),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "No user matches the filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_apartment_users(
    State(state): State<AppState>,
    WithRejection(Query(params), _): ApiQuery<ApartmentUserListParam>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ApartmentUserFilter::from(params);
    let cache_key = key::apartment_user_list(&filter);

    let users: Vec<ApartmentUserDto> = read_through(state.cache.as_ref(), &cache_key, || async {
        let users = ApartmentUserService::new(&state.db).list(&filter).await?;

        Ok::<_, AppError>(users.into_iter().map(ApartmentUser::into_dto).collect())
    })
    .await?;

    Ok((StatusCode::OK, Json(users)))
}

#[utoipa::path(
    get,
    path = "/v2/apartment_users/{id}",
    tag = APARTMENT_USER_TAG,
    params(
        ("id" = i32, Path, description = "Apartment user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = ApartmentUserDto),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn view_apartment_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cache_key = key::apartment_user(id);

    let user: ApartmentUserDto = read_through(state.cache.as_ref(), &cache_key, || async {
        let user = ApartmentUserService::new(&state.db).view(id).await?;

        Ok::<_, AppError>(user.into_dto())
    })
    .await?;

    Ok((StatusCode::OK, Json(user)))
}

#[utoipa::path(
    patch,
    path = "/v2/apartment_users/{id}",
    tag = APARTMENT_USER_TAG,
    params(
        ("id" = i32, Path, description = "Apartment user ID")
    ),
    request_body = UpdateApartmentUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = ApartmentUserDto),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_apartment_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i32>,
    WithRejection(Json(payload), _): ApiJson<UpdateApartmentUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = ApartmentUserService::new(&state.db)
        .update(id, UpdateApartmentUserParam::from(payload))
        .await?;

    invalidate(
        state.cache.as_ref(),
        &[key::apartment_user(id)],
        &[key::APARTMENT_USER_LIST_PREFIX],
    )
    .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/v2/apartment_users/{id}",
    tag = APARTMENT_USER_TAG,
    params(
        ("id" = i32, Path, description = "Apartment user ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_apartment_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    ApartmentUserService::new(&state.db).delete(id).await?;

    invalidate(
        state.cache.as_ref(),
        &[key::apartment_user(id)],
        &[key::APARTMENT_USER_LIST_PREFIX],
    )
    .await?;

    Ok(StatusCode::OK)
}
