use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    AppState,
    error::{AppError, Result},
    middleware::ensure_admin,
    models::{DeleteOutcome, EmailQuery, NewOrder},
    queries::order_queries,
    utils::{
        json::{document_to_json, documents_to_json},
        jwt::Claims,
        object_id::parse_object_id,
    },
};

pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<NewOrder>,
) -> Result<(StatusCode, Json<Value>)> {
    let order = order_queries::create_order(&state.db, payload.into_document()?).await?;

    Ok((StatusCode::CREATED, Json(document_to_json(order))))
}

pub async fn list_own_orders(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Value>>> {
    if !claims.is_for(&query.email) {
        return Err(AppError::forbidden());
    }

    let orders = order_queries::find_by_email(&state.db, &query.email).await?;

    Ok(Json(documents_to_json(orders)))
}

pub async fn list_all_orders(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    let orders = order_queries::list_orders(&state.db).await?;

    Ok(Json(documents_to_json(orders)))
}

/// Owners may cancel their own orders; anyone else needs the admin role.
pub async fn delete_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>> {
    let id = parse_object_id(&id)?;

    let Some(order) = order_queries::find_by_id(&state.db, id).await? else {
        return Ok(Json(DeleteOutcome::deleted(0)));
    };

    let is_owner = order
        .get_str("email")
        .is_ok_and(|owner| claims.is_for(owner));

    if !is_owner {
        ensure_admin(&state.db, &claims).await?;
    }

    let result = order_queries::delete_order(&state.db, id).await?;

    Ok(Json(result.into()))
}
