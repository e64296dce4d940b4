//! Extractors whose rejections answer with the JSON error body.
//!
//! Path, query and body parse failures become `AppError::BadRequest`, so clients get
//! `400 {"error": ...}` instead of axum's plain-text rejection.

use axum::{
    extract::{Path, Query},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::server::error::AppError;

pub type ApiPath<T> = WithRejection<Path<T>, AppError>;
pub type ApiQuery<T> = WithRejection<Query<T>, AppError>;
pub type ApiJson<T> = WithRejection<Json<T>, AppError>;
