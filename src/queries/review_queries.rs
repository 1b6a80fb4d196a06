use mongodb::{
    Database,
    bson::{Document, doc, oid::ObjectId},
};

use crate::{database::REVIEWS, error::Result, queries::documents};

pub async fn create_review(db: &Database, review: Document) -> Result<Document> {
    documents::insert_and_fetch(db, REVIEWS, review).await
}

pub async fn find_by_product(db: &Database, product_id: ObjectId) -> Result<Vec<Document>> {
    documents::find_all(db, REVIEWS, doc! { "reviewId": product_id }).await
}
