mod auth;
mod billing;
mod blog;
mod cart;
mod hot_deal;
mod order;
mod outcome;
mod product;
mod user;

pub use auth::*;
pub use billing::*;
pub use blog::*;
pub use cart::*;
pub use hot_deal::*;
pub use order::*;
pub use outcome::*;
pub use product::*;
pub use user::*;

use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// `?email=` filter shared by the per-user collections.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Serializes a request payload for insertion. A client-supplied `_id` is
/// dropped so the store always assigns one.
pub fn to_insert_document<T: Serialize>(payload: &T) -> Result<Document> {
    let mut doc = bson::to_document(payload)?;
    doc.remove("_id");
    Ok(doc)
}

/// Serializes a patch into the body of a `$set`. Absent fields must be
/// skipped by the patch type itself, so an empty result means nothing to do.
pub fn to_set_document<T: Serialize>(patch: &T) -> Result<Document> {
    let doc = bson::to_document(patch)?;
    if doc.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }
    Ok(doc)
}
