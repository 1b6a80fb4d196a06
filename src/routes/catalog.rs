use axum::{Json, extract::State};
use serde_json::Value;

use crate::{AppState, error::Result, queries::catalog_queries, utils::json::documents_to_json};

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    let categories = catalog_queries::list_categories(&state.db).await?;

    Ok(Json(documents_to_json(categories)))
}

pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    let blogs = catalog_queries::list_blogs(&state.db).await?;

    Ok(Json(documents_to_json(blogs)))
}
