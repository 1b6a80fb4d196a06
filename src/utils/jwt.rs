use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    config::AuthConfig,
    error::{AppError, Result},
};

/// Decoded bearer token. Whatever identity object was presented to `/jwt`
/// comes back here, with `email` lifted out for the access checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
    #[serde(flatten)]
    pub identity: Map<String, Value>,
}

impl Claims {
    /// True when the token was issued for exactly this email.
    pub fn is_for(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }
}

pub fn issue_token(auth: &AuthConfig, mut identity: Map<String, Value>) -> Result<String> {
    identity.remove("exp");
    identity.remove("iat");

    let email = match identity.remove("email") {
        Some(Value::String(email)) => Some(email),
        Some(Value::Null) | None => None,
        Some(_) => return Err(AppError::BadRequest("email must be a string".to_string())),
    };

    let issued_at = Utc::now().timestamp();

    let claims = Claims {
        email,
        iat: issued_at,
        exp: issued_at + auth.token_ttl_secs,
        identity,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Token generation failed: {}", e)))
}

pub fn verify_token(auth: &AuthConfig, token: &str) -> Result<Claims> {
    // Expiry is exact: no grace period past `exp`.
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!("Rejected token: {}", e);
        AppError::unauthorized()
    })
}
