pub mod access;
pub mod json;
pub mod jwt;
pub mod object_id;
