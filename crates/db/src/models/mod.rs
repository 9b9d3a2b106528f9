//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO carrying the full replacement row, id included

pub mod patronage;
pub mod patronage_payment;
pub mod project;
pub mod project_collection;
pub mod user;
