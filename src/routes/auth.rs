use axum::{Json, extract::State};
use serde_json::{Map, Value};

use crate::{AppState, error::Result, models::TokenResponse, utils::jwt};

pub async fn issue_token(
    State(state): State<AppState>,
    Json(identity): Json<Map<String, Value>>,
) -> Result<Json<TokenResponse>> {
    let token = jwt::issue_token(&state.auth, identity)?;

    Ok(Json(TokenResponse { token }))
}
