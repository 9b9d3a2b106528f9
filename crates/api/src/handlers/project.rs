//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metrics::counter;
use patron_core::error::CoreError;
use patron_core::metric_names;
use patron_core::types::DbId;
use patron_db::models::project::{CreateProject, Project, UpdateProject};
use patron_db::repositories::ProjectRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let project = ProjectRepo::create(&state.pool, &input).await?;

    counter!(metric_names::PROJECTS_CREATED_TOTAL).increment(1);
    tracing::info!(project_id = project.id, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    if input.id != id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "body id {} does not match path id {id}",
            input.id
        ))));
    }
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    counter!(metric_names::PROJECTS_UPDATED_TOTAL).increment(1);
    tracing::info!(project_id = id, "Project updated");

    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Deleting an absent row is a no-op. A project with child projects cannot
/// be deleted; the RESTRICT rule surfaces as a validation error.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        counter!(metric_names::PROJECTS_DELETED_TOTAL).increment(1);
        tracing::info!(project_id = id, "Project deleted");
    } else {
        tracing::warn!(project_id = id, "Project not found for deletion");
    }
    Ok(StatusCode::NO_CONTENT)
}
