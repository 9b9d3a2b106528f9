//! Project entity model and DTOs.

use patron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub owner_user_id: DbId,
    /// Optional parent project. A project cannot be deleted while children
    /// still reference it.
    pub parent_project_id: Option<DbId>,
    /// Optional membership in a project collection. Cleared when the
    /// collection is deleted.
    pub collection_id: Option<DbId>,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub owner_user_id: DbId,
    pub parent_project_id: Option<DbId>,
    pub collection_id: Option<DbId>,
    pub created_by: Option<DbId>,
}

/// DTO for replacing an existing project. Carries the full entity, id included.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProject {
    pub id: DbId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub owner_user_id: DbId,
    pub parent_project_id: Option<DbId>,
    pub collection_id: Option<DbId>,
    pub updated_by: Option<DbId>,
}
