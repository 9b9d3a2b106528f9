//! Repository for the `patronage_payments` table.

use patron_core::types::DbId;
use sqlx::PgPool;

use crate::models::patronage_payment::{
    CreatePatronagePayment, PatronagePayment, UpdatePatronagePayment,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, patronage_id, amount, paid_at, created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for patronage payments.
pub struct PatronagePaymentRepo;

impl PatronagePaymentRepo {
    /// Insert a new payment, returning the created row.
    #[tracing::instrument(skip(pool, input))]
    pub async fn create(
        pool: &PgPool,
        input: &CreatePatronagePayment,
    ) -> Result<PatronagePayment, sqlx::Error> {
        let query = format!(
            "INSERT INTO patronage_payments (patronage_id, amount, paid_at, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PatronagePayment>(&query)
            .bind(input.patronage_id)
            .bind(input.amount)
            .bind(input.paid_at)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a payment by its internal ID.
    #[tracing::instrument(skip(pool))]
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PatronagePayment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patronage_payments WHERE id = $1");
        sqlx::query_as::<_, PatronagePayment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all payments ordered by most recently created first.
    #[tracing::instrument(skip(pool))]
    pub async fn list(pool: &PgPool) -> Result<Vec<PatronagePayment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patronage_payments ORDER BY created_at DESC");
        sqlx::query_as::<_, PatronagePayment>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace a payment row with the full entity in `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    #[tracing::instrument(skip(pool, input))]
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePatronagePayment,
    ) -> Result<Option<PatronagePayment>, sqlx::Error> {
        let query = format!(
            "UPDATE patronage_payments SET
                patronage_id = $2,
                amount = $3,
                paid_at = $4,
                updated_by = $5,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PatronagePayment>(&query)
            .bind(id)
            .bind(input.patronage_id)
            .bind(input.amount)
            .bind(input.paid_at)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a payment by ID. Returns `true` if a row was removed.
    #[tracing::instrument(skip(pool))]
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM patronage_payments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
