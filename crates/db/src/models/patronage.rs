//! Patronage entity model and DTOs.
//!
//! A patronage links a patron (user) to the project they sponsor.

use patron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A patronage row from the `patronages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Patronage {
    pub id: DbId,
    pub patron_user_id: DbId,
    pub project_id: DbId,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new patronage.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePatronage {
    pub patron_user_id: DbId,
    pub project_id: DbId,
    pub created_by: Option<DbId>,
}

/// DTO for replacing an existing patronage. Carries the full entity, id included.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePatronage {
    pub id: DbId,
    pub patron_user_id: DbId,
    pub project_id: DbId,
    pub updated_by: Option<DbId>,
}
