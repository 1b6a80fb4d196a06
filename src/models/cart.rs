use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A cart line. Product fields travel along untyped in `extra`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewCartItem {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewWishlistItem {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
