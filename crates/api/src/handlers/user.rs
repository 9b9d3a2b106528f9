//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metrics::counter;
use patron_core::error::CoreError;
use patron_core::metric_names;
use patron_core::types::DbId;
use patron_db::models::user::{CreateUser, UpdateUser, User};
use patron_db::repositories::UserRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let user = UserRepo::create(&state.pool, &input).await?;

    counter!(metric_names::USERS_CREATED_TOTAL).increment(1);
    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    if input.id != id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "body id {} does not match path id {id}",
            input.id
        ))));
    }
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    counter!(metric_names::USERS_UPDATED_TOTAL).increment(1);
    tracing::info!(user_id = id, "User updated");

    Ok(Json(user))
}

/// DELETE /api/v1/users/{id}
///
/// Deleting an absent row is a no-op, not an error.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        counter!(metric_names::USERS_DELETED_TOTAL).increment(1);
        tracing::info!(user_id = id, "User deleted");
    } else {
        tracing::warn!(user_id = id, "User not found for deletion");
    }
    Ok(StatusCode::NO_CONTENT)
}
