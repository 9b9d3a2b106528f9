//! HTTP handlers, one module per resource.

pub mod patronage;
pub mod patronage_payment;
pub mod project;
pub mod project_collection;
pub mod user;
