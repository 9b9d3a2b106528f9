//! Repository for the `project_collections` table and project membership.

use patron_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::Project;
use crate::models::project_collection::{
    CreateProjectCollection, ProjectCollection, UpdateProjectCollection,
};
use crate::repositories::project_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, owner_user_id, created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for project collections, plus membership
/// management on the project side of the link.
pub struct ProjectCollectionRepo;

impl ProjectCollectionRepo {
    /// Insert a new collection, returning the created row.
    #[tracing::instrument(skip(pool, input))]
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectCollection,
    ) -> Result<ProjectCollection, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_collections (name, description, owner_user_id, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectCollection>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.owner_user_id)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a collection by its internal ID.
    #[tracing::instrument(skip(pool))]
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectCollection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_collections WHERE id = $1");
        sqlx::query_as::<_, ProjectCollection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all collections ordered by most recently created first.
    #[tracing::instrument(skip(pool))]
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectCollection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_collections ORDER BY created_at DESC");
        sqlx::query_as::<_, ProjectCollection>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace a collection row with the full entity in `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    #[tracing::instrument(skip(pool, input))]
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectCollection,
    ) -> Result<Option<ProjectCollection>, sqlx::Error> {
        let query = format!(
            "UPDATE project_collections SET
                name = $2,
                description = $3,
                owner_user_id = $4,
                updated_by = $5,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectCollection>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.owner_user_id)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a collection by ID. Returns `true` if a row was removed.
    ///
    /// Member projects keep existing; their `collection_id` is cleared by
    /// the foreign key's SET NULL action.
    #[tracing::instrument(skip(pool))]
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_collections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the projects currently belonging to a collection.
    #[tracing::instrument(skip(pool))]
    pub async fn find_projects(
        pool: &PgPool,
        collection_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM projects WHERE collection_id = $1 ORDER BY created_at DESC",
            project_repo::COLUMNS
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(collection_id)
            .fetch_all(pool)
            .await
    }

    /// Add a project to a collection by setting its `collection_id`.
    ///
    /// Returns `false` if the project does not exist. A nonexistent
    /// collection surfaces as a foreign-key violation.
    #[tracing::instrument(skip(pool))]
    pub async fn add_project(
        pool: &PgPool,
        collection_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET collection_id = $1, updated_at = now() WHERE id = $2",
        )
        .bind(collection_id)
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a project from a collection by clearing its `collection_id`.
    ///
    /// Returns `false` if the project does not exist or does not currently
    /// belong to the named collection.
    #[tracing::instrument(skip(pool))]
    pub async fn remove_project(
        pool: &PgPool,
        collection_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET collection_id = NULL, updated_at = now()
             WHERE id = $2 AND collection_id = $1",
        )
        .bind(collection_id)
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
