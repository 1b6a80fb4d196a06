use mongodb::{
    Database,
    bson::{Document, doc, oid::ObjectId},
    results::{DeleteResult, InsertOneResult},
};

use crate::{database::CARTS, error::Result, queries::documents};

pub async fn add_item(db: &Database, item: Document) -> Result<InsertOneResult> {
    documents::insert(db, CARTS, item).await
}

pub async fn find_by_email(db: &Database, email: &str) -> Result<Vec<Document>> {
    documents::find_all(db, CARTS, doc! { "email": email }).await
}

pub async fn delete_item(db: &Database, id: ObjectId) -> Result<DeleteResult> {
    documents::delete_by_id(db, CARTS, id).await
}

/// Clears every cart line belonging to `email`.
pub async fn delete_by_email(db: &Database, email: &str) -> Result<DeleteResult> {
    let result = db
        .collection::<Document>(CARTS)
        .delete_many(doc! { "email": email })
        .await?;

    Ok(result)
}
