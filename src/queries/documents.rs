use futures::TryStreamExt;
use mongodb::{
    Database,
    bson::{Document, doc, oid::ObjectId},
    results::{DeleteResult, InsertOneResult, UpdateResult},
};

use crate::error::{AppError, Result};

pub async fn find_all(db: &Database, collection: &str, filter: Document) -> Result<Vec<Document>> {
    let docs = db
        .collection::<Document>(collection)
        .find(filter)
        .await?
        .try_collect::<Vec<_>>()
        .await?;

    Ok(docs)
}

pub async fn find_by_id(db: &Database, collection: &str, id: ObjectId) -> Result<Option<Document>> {
    let doc = db
        .collection::<Document>(collection)
        .find_one(doc! { "_id": id })
        .await?;

    Ok(doc)
}

pub async fn insert(db: &Database, collection: &str, doc: Document) -> Result<InsertOneResult> {
    let result = db.collection::<Document>(collection).insert_one(doc).await?;

    Ok(result)
}

/// Inserts and reads the stored document back, so server-side defaults are
/// visible to the caller.
pub async fn insert_and_fetch(db: &Database, collection: &str, doc: Document) -> Result<Document> {
    let result = insert(db, collection, doc).await?;

    let stored = db
        .collection::<Document>(collection)
        .find_one(doc! { "_id": result.inserted_id })
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("Inserted document missing from {}", collection))
        })?;

    Ok(stored)
}

pub async fn set_fields(
    db: &Database,
    collection: &str,
    id: ObjectId,
    fields: Document,
) -> Result<UpdateResult> {
    let result = db
        .collection::<Document>(collection)
        .update_one(doc! { "_id": id }, doc! { "$set": fields })
        .await?;

    Ok(result)
}

pub async fn delete_by_id(db: &Database, collection: &str, id: ObjectId) -> Result<DeleteResult> {
    let result = db
        .collection::<Document>(collection)
        .delete_one(doc! { "_id": id })
        .await?;

    Ok(result)
}
