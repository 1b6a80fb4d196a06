use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        AdminStatus, DeleteOutcome, InsertOutcome, MessageResponse, NewUser, ProfileUpdate,
        UpdateOutcome, to_set_document,
    },
    queries::user_queries,
    utils::{
        access::{UserRole, has_role},
        json::documents_to_json,
        jwt::Claims,
        object_id::parse_object_id,
    },
};

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<Json<InsertOutcome>> {
    if user_queries::find_by_email(&state.db, &payload.email)
        .await?
        .is_some()
    {
        return Ok(Json(InsertOutcome::skipped("User Already Exists")));
    }

    let email = payload.email.clone();
    let result = user_queries::create_user(&state.db, payload.into_document()?).await?;

    tracing::info!("Registered user {}", email);

    Ok(Json(result.into()))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    let users = user_queries::list_users(&state.db).await?;

    Ok(Json(documents_to_json(users)))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<MessageResponse>> {
    if !payload.fields.is_empty() {
        let fields = to_set_document(&payload.fields)?;

        if let Err(e) = user_queries::update_profile(&state.db, &payload.email, fields).await {
            tracing::error!("Error updating user {} in database: {}", payload.email, e);
            return Err(AppError::InternalError("Error updating profile".to_string()));
        }
    }

    Ok(Json(MessageResponse::new("Profile updated successfully")))
}

/// Callers may only ask about their own account.
pub async fn admin_status(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(email): Path<String>,
) -> Result<Json<AdminStatus>> {
    if !claims.is_for(&email) {
        return Err(AppError::forbidden());
    }

    let user = user_queries::find_by_email(&state.db, &email).await?;
    let admin = has_role(
        user.as_ref().and_then(|user| user.role.as_deref()),
        UserRole::Admin,
    );

    Ok(Json(AdminStatus { admin }))
}

pub async fn make_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateOutcome>> {
    let id = parse_object_id(&id)?;
    let result = user_queries::grant_role(&state.db, id, UserRole::Admin).await?;

    tracing::info!("Granted admin role to user {}", id);

    Ok(Json(result.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>> {
    let id = parse_object_id(&id)?;
    let result = user_queries::delete_user(&state.db, id).await?;

    Ok(Json(result.into()))
}
