use mongodb::{
    Database,
    bson::{Document, doc},
};

use crate::{
    database::{BLOGS, CATEGORIES},
    error::Result,
    queries::documents,
};

pub async fn list_categories(db: &Database) -> Result<Vec<Document>> {
    documents::find_all(db, CATEGORIES, doc! {}).await
}

pub async fn list_blogs(db: &Database) -> Result<Vec<Document>> {
    documents::find_all(db, BLOGS, doc! {}).await
}
