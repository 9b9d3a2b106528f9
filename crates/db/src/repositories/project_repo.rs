//! Repository for the `projects` table.

use patron_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition. Also used by the
/// collection repository when reading member projects.
pub(crate) const COLUMNS: &str = "id, name, description, owner_user_id, parent_project_id, \
                                  collection_id, created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    #[tracing::instrument(skip(pool, input))]
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (name, description, owner_user_id, parent_project_id, collection_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.owner_user_id)
            .bind(input.parent_project_id)
            .bind(input.collection_id)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    #[tracing::instrument(skip(pool))]
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    #[tracing::instrument(skip(pool))]
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace a project row with the full entity in `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    #[tracing::instrument(skip(pool, input))]
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                description = $3,
                owner_user_id = $4,
                parent_project_id = $5,
                collection_id = $6,
                updated_by = $7,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.owner_user_id)
            .bind(input.parent_project_id)
            .bind(input.collection_id)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while child projects still
    /// reference this row.
    #[tracing::instrument(skip(pool))]
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
