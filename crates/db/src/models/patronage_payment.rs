//! Patronage payment entity model and DTOs.

use patron_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A payment row from the `patronage_payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PatronagePayment {
    pub id: DbId,
    pub patronage_id: DbId,
    /// Monetary amount, NUMERIC(12, 2) in the database.
    pub amount: Decimal,
    pub paid_at: Timestamp,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new payment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePatronagePayment {
    pub patronage_id: DbId,
    pub amount: Decimal,
    pub paid_at: Timestamp,
    pub created_by: Option<DbId>,
}

/// DTO for replacing an existing payment. Carries the full entity, id included.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePatronagePayment {
    pub id: DbId,
    pub patronage_id: DbId,
    pub amount: Decimal,
    pub paid_at: Timestamp,
    pub updated_by: Option<DbId>,
}
