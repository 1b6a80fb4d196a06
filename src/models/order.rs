use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::Result, models::to_insert_document};

#[derive(Debug, Serialize, Deserialize)]
pub struct NewOrder {
    pub email: String,
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewOrder {
    pub fn into_document(self) -> Result<Document> {
        let mut doc = to_insert_document(&self)?;
        doc.insert("createdAt", DateTime::now());
        Ok(doc)
    }
}
