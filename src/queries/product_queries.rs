use mongodb::{
    Database,
    bson::{Document, doc, oid::ObjectId},
    results::{DeleteResult, InsertOneResult, UpdateResult},
};

use crate::{database::PRODUCTS, error::Result, queries::documents};

pub async fn create_product(db: &Database, product: Document) -> Result<InsertOneResult> {
    documents::insert(db, PRODUCTS, product).await
}

pub async fn list_products(db: &Database) -> Result<Vec<Document>> {
    documents::find_all(db, PRODUCTS, doc! {}).await
}

pub async fn update_product(db: &Database, id: ObjectId, fields: Document) -> Result<UpdateResult> {
    documents::set_fields(db, PRODUCTS, id, fields).await
}

pub async fn delete_product(db: &Database, id: ObjectId) -> Result<DeleteResult> {
    documents::delete_by_id(db, PRODUCTS, id).await
}
