//! Handlers for the `/patronages` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metrics::counter;
use patron_core::error::CoreError;
use patron_core::metric_names;
use patron_core::types::DbId;
use patron_db::models::patronage::{CreatePatronage, Patronage, UpdatePatronage};
use patron_db::repositories::PatronageRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/patronages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePatronage>,
) -> AppResult<(StatusCode, Json<Patronage>)> {
    let patronage = PatronageRepo::create(&state.pool, &input).await?;

    counter!(metric_names::PATRONAGES_CREATED_TOTAL).increment(1);
    tracing::info!(patronage_id = patronage.id, "Patronage created");

    Ok((StatusCode::CREATED, Json(patronage)))
}

/// GET /api/v1/patronages
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Patronage>>> {
    let patronages = PatronageRepo::list(&state.pool).await?;
    Ok(Json(patronages))
}

/// GET /api/v1/patronages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Patronage>> {
    let patronage = PatronageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patronage",
            id,
        }))?;
    Ok(Json(patronage))
}

/// PUT /api/v1/patronages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePatronage>,
) -> AppResult<Json<Patronage>> {
    if input.id != id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "body id {} does not match path id {id}",
            input.id
        ))));
    }

    let patronage = PatronageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patronage",
            id,
        }))?;

    counter!(metric_names::PATRONAGES_UPDATED_TOTAL).increment(1);
    tracing::info!(patronage_id = id, "Patronage updated");

    Ok(Json(patronage))
}

/// DELETE /api/v1/patronages/{id}
///
/// Deleting an absent row is a no-op. Payments belonging to the patronage
/// are removed by the cascade rule.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PatronageRepo::delete(&state.pool, id).await?;
    if deleted {
        counter!(metric_names::PATRONAGES_DELETED_TOTAL).increment(1);
        tracing::info!(patronage_id = id, "Patronage deleted");
    } else {
        tracing::warn!(patronage_id = id, "Patronage not found for deletion");
    }
    Ok(StatusCode::NO_CONTENT)
}
