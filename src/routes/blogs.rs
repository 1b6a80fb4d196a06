use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    AppState,
    error::Result,
    models::NewComment,
    queries::comment_queries,
    utils::{
        json::{document_to_json, documents_to_json},
        object_id::parse_object_id,
    },
};

pub async fn create_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NewComment>,
) -> Result<(StatusCode, Json<Value>)> {
    let blog_id = parse_object_id(&id)?;
    let comment = comment_queries::create_comment(&state.db, payload.into_document(blog_id)?).await?;

    Ok((StatusCode::CREATED, Json(document_to_json(comment))))
}

pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>> {
    let blog_id = parse_object_id(&id)?;
    let comments = comment_queries::find_by_blog(&state.db, blog_id).await?;

    Ok(Json(documents_to_json(comments)))
}
