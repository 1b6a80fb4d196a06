use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{DeleteOutcome, EmailQuery, InsertOutcome, NewCartItem, to_insert_document},
    queries::cart_queries,
    utils::{json::documents_to_json, object_id::parse_object_id},
};

pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<NewCartItem>,
) -> Result<Json<InsertOutcome>> {
    let item = to_insert_document(&payload)?;
    let result = cart_queries::add_item(&state.db, item).await?;

    Ok(Json(result.into()))
}

pub async fn list_cart(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Value>>> {
    let items = cart_queries::find_by_email(&state.db, &query.email).await?;

    Ok(Json(documents_to_json(items)))
}

pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>> {
    let id = parse_object_id(&id)?;
    let result = cart_queries::delete_item(&state.db, id).await?;

    Ok(Json(result.into()))
}

/// Empties a customer's cart, typically after checkout.
pub async fn clear_cart(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<DeleteOutcome>> {
    let result = cart_queries::delete_by_email(&state.db, &query.email).await?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound("No cart items found".to_string()));
    }

    tracing::info!(
        "Cleared {} cart items for {}",
        result.deleted_count,
        query.email
    );

    Ok(Json(result.into()))
}
