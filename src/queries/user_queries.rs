use mongodb::{
    Database,
    bson::{Document, doc, oid::ObjectId},
    results::{DeleteResult, InsertOneResult, UpdateResult},
};

use crate::{
    database::USERS,
    error::Result,
    models::User,
    queries::documents,
    utils::access::UserRole,
};

pub async fn find_by_email(db: &Database, email: &str) -> Result<Option<User>> {
    let user = db
        .collection::<Document>(USERS)
        .find_one(doc! { "email": email })
        .projection(doc! { "role": 1 })
        .await?;

    Ok(user.as_ref().map(User::from_document))
}

pub async fn create_user(db: &Database, user: Document) -> Result<InsertOneResult> {
    documents::insert(db, USERS, user).await
}

pub async fn list_users(db: &Database) -> Result<Vec<Document>> {
    documents::find_all(db, USERS, doc! {}).await
}

pub async fn update_profile(db: &Database, email: &str, fields: Document) -> Result<UpdateResult> {
    let result = db
        .collection::<Document>(USERS)
        .update_one(doc! { "email": email }, doc! { "$set": fields })
        .await?;

    Ok(result)
}

pub async fn grant_role(db: &Database, id: ObjectId, role: UserRole) -> Result<UpdateResult> {
    documents::set_fields(db, USERS, id, doc! { "role": role.as_str() }).await
}

pub async fn delete_user(db: &Database, id: ObjectId) -> Result<DeleteResult> {
    documents::delete_by_id(db, USERS, id).await
}
