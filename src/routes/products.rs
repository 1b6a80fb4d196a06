use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    AppState,
    error::Result,
    models::{
        DeleteOutcome, InsertOutcome, NewProduct, NewReview, ProductPatch, UpdateOutcome,
        to_insert_document, to_set_document,
    },
    queries::{product_queries, review_queries},
    utils::{
        json::{document_to_json, documents_to_json},
        object_id::parse_object_id,
    },
};

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> Result<Json<InsertOutcome>> {
    let product = to_insert_document(&payload)?;
    let result = product_queries::create_product(&state.db, product).await?;

    Ok(Json(result.into()))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    let products = product_queries::list_products(&state.db).await?;

    Ok(Json(documents_to_json(products)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<UpdateOutcome>> {
    let id = parse_object_id(&id)?;
    let fields = to_set_document(&patch)?;
    let result = product_queries::update_product(&state.db, id, fields).await?;

    Ok(Json(result.into()))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>> {
    let id = parse_object_id(&id)?;
    let result = product_queries::delete_product(&state.db, id).await?;

    Ok(Json(result.into()))
}

//REVIEW ROUTES
pub async fn create_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NewReview>,
) -> Result<(StatusCode, Json<Value>)> {
    let product_id = parse_object_id(&id)?;
    let review = review_queries::create_review(&state.db, payload.into_document(product_id)?).await?;

    Ok((StatusCode::CREATED, Json(document_to_json(review))))
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>> {
    let product_id = parse_object_id(&id)?;
    let reviews = review_queries::find_by_product(&state.db, product_id).await?;

    Ok(Json(documents_to_json(reviews)))
}
