use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::jwt::JwtError;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization` header.
    #[error("Missing authorization header")]
    MissingToken,

    /// The `Authorization` header is not of the form `Bearer <token>`.
    #[error("Authorization header is not a bearer token")]
    MalformedHeader,

    /// The bearer token failed signature, algorithm or expiry validation.
    #[error(transparent)]
    InvalidToken(#[from] JwtError),
}

/// Converts authentication errors into HTTP responses.
///
/// Every authentication failure answers 401 Unauthorized with an empty body. The
/// underlying reason is logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        StatusCode::UNAUTHORIZED.into_response()
    }
}
