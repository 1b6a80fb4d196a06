use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{
    AppState,
    error::Result,
    models::{
        DeleteOutcome, HotDealPatch, InsertOutcome, NewHotDeal, UpdateOutcome, to_insert_document,
        to_set_document,
    },
    queries::hot_deal_queries,
    utils::{json::documents_to_json, object_id::parse_object_id},
};

pub async fn create_hot_deal(
    State(state): State<AppState>,
    Json(payload): Json<NewHotDeal>,
) -> Result<Json<InsertOutcome>> {
    let deal = to_insert_document(&payload)?;
    let result = hot_deal_queries::create_hot_deal(&state.db, deal).await?;

    Ok(Json(result.into()))
}

pub async fn list_hot_deals(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    let deals = hot_deal_queries::list_hot_deals(&state.db).await?;

    Ok(Json(documents_to_json(deals)))
}

pub async fn update_hot_deal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<HotDealPatch>,
) -> Result<Json<UpdateOutcome>> {
    let id = parse_object_id(&id)?;
    let fields = to_set_document(&patch)?;
    let result = hot_deal_queries::update_hot_deal(&state.db, id, fields).await?;

    Ok(Json(result.into()))
}

pub async fn delete_hot_deal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>> {
    let id = parse_object_id(&id)?;
    let result = hot_deal_queries::delete_hot_deal(&state.db, id).await?;

    Ok(Json(result.into()))
}
