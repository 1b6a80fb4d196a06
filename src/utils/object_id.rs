use mongodb::bson::oid::ObjectId;

use crate::error::{AppError, Result};

pub fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::BadRequest("Invalid id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_24_hex_chars() {
        let id = parse_object_id("65a1f0c2b3d4e5f601234567").unwrap();
        assert_eq!(id.to_hex(), "65a1f0c2b3d4e5f601234567");
    }

    #[test]
    fn rejects_anything_else() {
        for raw in ["", "123", "zza1f0c2b3d4e5f601234567", "65a1f0c2b3d4e5f6012345678"] {
            assert!(matches!(parse_object_id(raw), Err(AppError::BadRequest(_))));
        }
    }
}
