//! Bearer token authentication for the `/v2` API.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::server::{error::auth::AuthError, state::AppState};

/// Identity of the caller, inserted into request extensions by [`require_bearer`].
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
}

/// Rejects requests without a valid `Authorization: Bearer <token>` header.
///
/// On success the token's claims are made available to handlers as an
/// `Extension<AuthUser>`. Every failure answers 401 with an empty body.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let claims = state.jwt.parse_token(header)?;

    request.extensions_mut().insert(AuthUser {
        name: claims.user_name,
        email: claims.user_email,
    });

    Ok(next.run(request).await)
}
