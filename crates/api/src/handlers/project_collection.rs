//! Handlers for the `/project-collections` resource.
//!
//! Collection reads always include member projects; membership itself is
//! managed through the nested `/{id}/projects/{project_id}` routes.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metrics::counter;
use patron_core::error::CoreError;
use patron_core::metric_names;
use patron_core::types::DbId;
use patron_db::models::project::Project;
use patron_db::models::project_collection::{
    CreateProjectCollection, ProjectCollection, ProjectCollectionDetail, UpdateProjectCollection,
};
use patron_db::repositories::{ProjectCollectionRepo, ProjectRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/project-collections
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectCollection>,
) -> AppResult<(StatusCode, Json<ProjectCollection>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let collection = ProjectCollectionRepo::create(&state.pool, &input).await?;

    counter!(metric_names::COLLECTIONS_CREATED_TOTAL).increment(1);
    tracing::info!(collection_id = collection.id, "Collection created");

    Ok((StatusCode::CREATED, Json(collection)))
}

/// GET /api/v1/project-collections
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectCollectionDetail>>> {
    let collections = ProjectCollectionRepo::list(&state.pool).await?;

    // One projects query for the whole listing instead of one per collection.
    let mut by_collection: HashMap<DbId, Vec<Project>> = HashMap::new();
    for project in ProjectRepo::list(&state.pool).await? {
        if let Some(collection_id) = project.collection_id {
            by_collection.entry(collection_id).or_default().push(project);
        }
    }

    let details = collections
        .into_iter()
        .map(|collection| {
            let projects = by_collection.remove(&collection.id).unwrap_or_default();
            ProjectCollectionDetail {
                collection,
                projects,
            }
        })
        .collect();

    Ok(Json(details))
}

/// GET /api/v1/project-collections/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectCollectionDetail>> {
    let collection = ProjectCollectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectCollection",
            id,
        }))?;
    let projects = ProjectCollectionRepo::find_projects(&state.pool, id).await?;

    Ok(Json(ProjectCollectionDetail {
        collection,
        projects,
    }))
}

/// PUT /api/v1/project-collections/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectCollection>,
) -> AppResult<Json<ProjectCollection>> {
    if input.id != id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "body id {} does not match path id {id}",
            input.id
        ))));
    }
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let collection = ProjectCollectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectCollection",
            id,
        }))?;

    counter!(metric_names::COLLECTIONS_UPDATED_TOTAL).increment(1);
    tracing::info!(collection_id = id, "Collection updated");

    Ok(Json(collection))
}

/// DELETE /api/v1/project-collections/{id}
///
/// Deleting an absent row is a no-op. Member projects survive; the
/// collection link is cleared by the database.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectCollectionRepo::delete(&state.pool, id).await?;
    if deleted {
        counter!(metric_names::COLLECTIONS_DELETED_TOTAL).increment(1);
        tracing::info!(collection_id = id, "Collection deleted");
    } else {
        tracing::warn!(collection_id = id, "Collection not found for deletion");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/project-collections/{id}/projects/{project_id}
pub async fn add_project(
    State(state): State<AppState>,
    Path((id, project_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let added = ProjectCollectionRepo::add_project(&state.pool, id, project_id).await?;
    if !added {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }));
    }

    tracing::info!(collection_id = id, project_id, "Project added to collection");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/project-collections/{id}/projects/{project_id}
///
/// Fails with 404 when the project does not exist or does not currently
/// belong to the named collection.
pub async fn remove_project(
    State(state): State<AppState>,
    Path((id, project_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = ProjectCollectionRepo::remove_project(&state.pool, id, project_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }));
    }

    tracing::info!(
        collection_id = id,
        project_id,
        "Project removed from collection"
    );
    Ok(StatusCode::NO_CONTENT)
}
