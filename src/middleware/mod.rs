use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use mongodb::Database;

use crate::{
    AppState,
    error::{AppError, Result},
    queries::user_queries,
    utils::{
        access::{self, UserRole},
        jwt::{self, Claims},
    },
};

/// Verifies the bearer token and attaches its `Claims` to the request.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(AppError::unauthorized)?;

    let claims = jwt::verify_token(&state.auth, token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Must be layered inside `auth_middleware`. The role is read fresh from the
/// users collection on every request.
pub async fn admin_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .cloned()
        .ok_or_else(AppError::unauthorized)?;

    ensure_admin(&state.db, &claims).await?;

    Ok(next.run(req).await)
}

pub async fn ensure_admin(db: &Database, claims: &Claims) -> Result<()> {
    let email = claims.email.as_deref().ok_or_else(AppError::forbidden)?;
    let user = user_queries::find_by_email(db, email).await?;

    access::require_role(
        user.as_ref().and_then(|user| user.role.as_deref()),
        UserRole::Admin,
    )
}
