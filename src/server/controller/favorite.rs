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
        favorite::{CreateFavoriteDto, FavoriteDto},
    },
    server::{
        cache::{invalidate, key, read_through},
        controller::{
            extract::{ApiJson, ApiPath, ApiQuery},
            param::FavoritePairParam,
        },
        error::AppError,
        model::favorite::Favorite,
        service::favorite::FavoriteService,
        state::AppState,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

#[utoipa::path(
    post,
    path = "/v2/favorites",
    tag = FAVORITE_TAG,
    request_body = CreateFavoriteDto,
    responses(
        (status = 200, description = "Successfully added favorite", body = FavoriteDto),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "User or apartment not found", body = ErrorDto),
        (status = 409, description = "Apartment already a favorite of the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): ApiJson<CreateFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::new(&state.db)
        .add(payload.user_id, payload.apartment_id)
        .await?;

    invalidate(
        state.cache.as_ref(),
        &[
            key::FAVORITE_LIST.to_string(),
            key::favorites_of_user(favorite.user_id),
        ],
        &[],
    )
    .await?;

    Ok((StatusCode::OK, Json(favorite.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v2/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = Vec<FavoriteDto>),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let favorites: Vec<FavoriteDto> = read_through(state.cache.as_ref(), key::FAVORITE_LIST, || async {
        let favorites = FavoriteService::new(&state.db).list().await?;

        Ok::<_, AppError>(favorites.into_iter().map(Favorite::into_dto).collect())
    })
    .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

#[utoipa::path(
    get,
    path = "/v2/favorites/{user_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Apartment user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorites of the user", body = Vec<FavoriteDto>),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "User has no favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn view_favorites(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cache_key = key::favorites_of_user(user_id);

    let favorites: Vec<FavoriteDto> = read_through(state.cache.as_ref(), &cache_key, || async {
        let favorites = FavoriteService::new(&state.db).view(user_id).await?;

        Ok::<_, AppError>(favorites.into_iter().map(Favorite::into_dto).collect())
    })
    .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

#[utoipa::path(
    delete,
    path = "/v2/favorites",
    tag = FAVORITE_TAG,
    params(FavoritePairParam),
    responses(
        (status = 200, description = "Favorite removed, or did not exist"),
        (status = 400, description = "Missing or invalid user_id/apartment_id"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    WithRejection(Query(pair), _): ApiQuery<FavoritePairParam>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .delete(pair.user_id, pair.apartment_id)
        .await?;

    invalidate(
        state.cache.as_ref(),
        &[
            key::FAVORITE_LIST.to_string(),
            key::favorites_of_user(pair.user_id),
        ],
        &[],
    )
    .await?;

    Ok(StatusCode::OK)
}
