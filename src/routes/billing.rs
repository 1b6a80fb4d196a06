use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;

use crate::{
    AppState,
    error::Result,
    models::{EmailQuery, InsertOutcome, NewBilling, to_insert_document},
    queries::billing_queries,
    utils::json::documents_to_json,
};

pub async fn create_billing(
    State(state): State<AppState>,
    Json(payload): Json<NewBilling>,
) -> Result<Json<InsertOutcome>> {
    let bill = to_insert_document(&payload)?;
    let result = billing_queries::create_billing(&state.db, bill).await?;

    Ok(Json(result.into()))
}

pub async fn list_billing(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Value>>> {
    let bills = billing_queries::find_by_email(&state.db, &query.email).await?;

    Ok(Json(documents_to_json(bills)))
}
