use mongodb::{
    Database,
    bson::{Document, doc},
    results::InsertOneResult,
};

use crate::{database::BILLINGS, error::Result, queries::documents};

pub async fn create_billing(db: &Database, bill: Document) -> Result<InsertOneResult> {
    documents::insert(db, BILLINGS, bill).await
}

pub async fn find_by_email(db: &Database, email: &str) -> Result<Vec<Document>> {
    documents::find_all(db, BILLINGS, doc! { "email": email }).await
}
