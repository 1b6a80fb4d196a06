use mongodb::{
    Database,
    bson::{Document, doc, oid::ObjectId},
    results::{DeleteResult, InsertOneResult, UpdateResult},
};

use crate::{database::HOT_DEALS, error::Result, queries::documents};

pub async fn create_hot_deal(db: &Database, deal: Document) -> Result<InsertOneResult> {
    documents::insert(db, HOT_DEALS, deal).await
}

pub async fn list_hot_deals(db: &Database) -> Result<Vec<Document>> {
    documents::find_all(db, HOT_DEALS, doc! {}).await
}

pub async fn update_hot_deal(db: &Database, id: ObjectId, fields: Document) -> Result<UpdateResult> {
    documents::set_fields(db, HOT_DEALS, id, fields).await
}

pub async fn delete_hot_deal(db: &Database, id: ObjectId) -> Result<DeleteResult> {
    documents::delete_by_id(db, HOT_DEALS, id).await
}
