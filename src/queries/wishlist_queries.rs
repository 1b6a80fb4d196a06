use mongodb::{
    Database,
    bson::{Document, doc, oid::ObjectId},
    results::{DeleteResult, InsertOneResult},
};

use crate::{database::WISHLIST, error::Result, queries::documents};

pub async fn add_item(db: &Database, item: Document) -> Result<InsertOneResult> {
    documents::insert(db, WISHLIST, item).await
}

pub async fn find_by_email(db: &Database, email: &str) -> Result<Vec<Document>> {
    documents::find_all(db, WISHLIST, doc! { "email": email }).await
}

pub async fn delete_item(db: &Database, id: ObjectId) -> Result<DeleteResult> {
    documents::delete_by_id(db, WISHLIST, id).await
}
