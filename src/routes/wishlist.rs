use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;

use crate::{
    AppState,
    error::Result,
    models::{DeleteOutcome, EmailQuery, InsertOutcome, NewWishlistItem, to_insert_document},
    queries::wishlist_queries,
    utils::{json::documents_to_json, object_id::parse_object_id},
};

pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Json(payload): Json<NewWishlistItem>,
) -> Result<Json<InsertOutcome>> {
    let item = to_insert_document(&payload)?;
    let result = wishlist_queries::add_item(&state.db, item).await?;

    Ok(Json(result.into()))
}

pub async fn list_wishlist(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Value>>> {
    let items = wishlist_queries::find_by_email(&state.db, &query.email).await?;

    Ok(Json(documents_to_json(items)))
}

pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>> {
    let id = parse_object_id(&id)?;
    let result = wishlist_queries::delete_item(&state.db, id).await?;

    Ok(Json(result.into()))
}
