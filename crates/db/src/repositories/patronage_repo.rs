//! Repository for the `patronages` table.

use patron_core::types::DbId;
use sqlx::PgPool;

use crate::models::patronage::{CreatePatronage, Patronage, UpdatePatronage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, patron_user_id, project_id, created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for patronages.
pub struct PatronageRepo;

impl PatronageRepo {
    /// Insert a new patronage, returning the created row.
    #[tracing::instrument(skip(pool, input))]
    pub async fn create(pool: &PgPool, input: &CreatePatronage) -> Result<Patronage, sqlx::Error> {
        let query = format!(
            "INSERT INTO patronages (patron_user_id, project_id, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patronage>(&query)
            .bind(input.patron_user_id)
            .bind(input.project_id)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a patronage by its internal ID.
    #[tracing::instrument(skip(pool))]
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Patronage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patronages WHERE id = $1");
        sqlx::query_as::<_, Patronage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all patronages ordered by most recently created first.
    #[tracing::instrument(skip(pool))]
    pub async fn list(pool: &PgPool) -> Result<Vec<Patronage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patronages ORDER BY created_at DESC");
        sqlx::query_as::<_, Patronage>(&query).fetch_all(pool).await
    }

    /// Replace a patronage row with the full entity in `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    #[tracing::instrument(skip(pool, input))]
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePatronage,
    ) -> Result<Option<Patronage>, sqlx::Error> {
        let query = format!(
            "UPDATE patronages SET
                patron_user_id = $2,
                project_id = $3,
                updated_by = $4,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patronage>(&query)
            .bind(id)
            .bind(input.patron_user_id)
            .bind(input.project_id)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a patronage by ID. Returns `true` if a row was removed.
    #[tracing::instrument(skip(pool))]
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM patronages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
