use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
        }
    }
}

/// Capability check on a stored role string. Matching is exact.
pub fn has_role(stored_role: Option<&str>, required: UserRole) -> bool {
    stored_role == Some(required.as_str())
}

pub fn require_role(stored_role: Option<&str>, required: UserRole) -> Result<()> {
    if has_role(stored_role, required) {
        Ok(())
    } else {
        Err(AppError::forbidden())
    }
}
