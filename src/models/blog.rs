use mongodb::bson::{DateTime, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::Result, models::to_insert_document};

#[derive(Debug, Serialize, Deserialize)]
pub struct NewComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewComment {
    pub fn into_document(self, blog_id: ObjectId) -> Result<Document> {
        let mut doc = to_insert_document(&self)?;
        doc.insert("blogId", blog_id);
        doc.insert("createdAt", DateTime::now());
        Ok(doc)
    }
}
