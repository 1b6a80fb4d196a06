use mongodb::{
    Database,
    bson::{Document, doc, oid::ObjectId},
};

use crate::{database::COMMENTS, error::Result, queries::documents};

pub async fn create_comment(db: &Database, comment: Document) -> Result<Document> {
    documents::insert_and_fetch(db, COMMENTS, comment).await
}

pub async fn find_by_blog(db: &Database, blog_id: ObjectId) -> Result<Vec<Document>> {
    documents::find_all(db, COMMENTS, doc! { "blogId": blog_id }).await
}
