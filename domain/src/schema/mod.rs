//! Feature schema and categorical value domains.

pub mod categorical;
pub mod feature_schema;
