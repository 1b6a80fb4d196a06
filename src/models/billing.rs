use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Billing details keyed by the customer's email; payment fields are free-form.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewBilling {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
