use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::Result, models::to_insert_document};

/// The slice of a stored user the access checks read. User documents are
/// written by clients, so anything but a string role counts as no role.
#[derive(Debug, Clone, Default)]
pub struct User {
    pub role: Option<String>,
}

impl User {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            role: doc.get_str("role").ok().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewUser {
    /// Roles are only granted through the admin endpoint, never on signup.
    pub fn into_document(mut self) -> Result<Document> {
        self.extra.remove("role");
        to_insert_document(&self)
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub email: String,
    #[serde(flatten)]
    pub fields: ProfileFields,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ProfileFields {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.photo_url.is_none() && self.phone.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct AdminStatus {
    pub admin: bool,
}
