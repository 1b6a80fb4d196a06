use mongodb::{
    Database,
    bson::{Document, doc, oid::ObjectId},
    results::DeleteResult,
};

use crate::{database::ORDERS, error::Result, queries::documents};

pub async fn create_order(db: &Database, order: Document) -> Result<Document> {
    documents::insert_and_fetch(db, ORDERS, order).await
}

pub async fn find_by_id(db: &Database, id: ObjectId) -> Result<Option<Document>> {
    documents::find_by_id(db, ORDERS, id).await
}

pub async fn find_by_email(db: &Database, email: &str) -> Result<Vec<Document>> {
    documents::find_all(db, ORDERS, doc! { "email": email }).await
}

pub async fn list_orders(db: &Database) -> Result<Vec<Document>> {
    documents::find_all(db, ORDERS, doc! {}).await
}

pub async fn delete_order(db: &Database, id: ObjectId) -> Result<DeleteResult> {
    documents::delete_by_id(db, ORDERS, id).await
}
