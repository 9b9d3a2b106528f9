//! Handlers for the `/patronage-payments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metrics::counter;
use patron_core::error::CoreError;
use patron_core::metric_names;
use patron_core::types::DbId;
use patron_db::models::patronage_payment::{
    CreatePatronagePayment, PatronagePayment, UpdatePatronagePayment,
};
use patron_db::repositories::PatronagePaymentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/patronage-payments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePatronagePayment>,
) -> AppResult<(StatusCode, Json<PatronagePayment>)> {
    let payment = PatronagePaymentRepo::create(&state.pool, &input).await?;

    counter!(metric_names::PAYMENTS_CREATED_TOTAL).increment(1);
    tracing::info!(payment_id = payment.id, "Payment created");

    Ok((StatusCode::CREATED, Json(payment)))
}

/// GET /api/v1/patronage-payments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PatronagePayment>>> {
    let payments = PatronagePaymentRepo::list(&state.pool).await?;
    Ok(Json(payments))
}

/// GET /api/v1/patronage-payments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PatronagePayment>> {
    let payment = PatronagePaymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PatronagePayment",
            id,
        }))?;
    Ok(Json(payment))
}

/// PUT /api/v1/patronage-payments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePatronagePayment>,
) -> AppResult<Json<PatronagePayment>> {
    if input.id != id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "body id {} does not match path id {id}",
            input.id
        ))));
    }

    let payment = PatronagePaymentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PatronagePayment",
            id,
        }))?;

    counter!(metric_names::PAYMENTS_UPDATED_TOTAL).increment(1);
    tracing::info!(payment_id = id, "Payment updated");

    Ok(Json(payment))
}

/// DELETE /api/v1/patronage-payments/{id}
///
/// Deleting an absent row is a no-op, not an error.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PatronagePaymentRepo::delete(&state.pool, id).await?;
    if deleted {
        counter!(metric_names::PAYMENTS_DELETED_TOTAL).increment(1);
        tracing::info!(payment_id = id, "Payment deleted");
    } else {
        tracing::warn!(payment_id = id, "Payment not found for deletion");
    }
    Ok(StatusCode::NO_CONTENT)
}
