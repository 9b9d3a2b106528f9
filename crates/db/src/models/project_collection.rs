//! Project collection entity model and DTOs.

use patron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::project::Project;

/// A collection row from the `project_collections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectCollection {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub owner_user_id: DbId,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A collection together with its member projects. Collection reads always
/// include membership, so this is the shape handlers return.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCollectionDetail {
    #[serde(flatten)]
    pub collection: ProjectCollection,
    pub projects: Vec<Project>,
}

/// DTO for creating a new collection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectCollection {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub owner_user_id: DbId,
    pub created_by: Option<DbId>,
}

/// DTO for replacing an existing collection. Carries the full entity, id included.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProjectCollection {
    pub id: DbId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub owner_user_id: DbId,
    pub updated_by: Option<DbId>,
}
