//! Route definitions for the `/project-collections` resource.
//!
//! Also mounts the membership routes that attach and detach projects.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project_collection;
use crate::state::AppState;

/// Routes mounted at `/project-collections`.
///
/// ```text
/// GET    /                                 -> list
/// POST   /                                 -> create
/// GET    /{id}                             -> get_by_id
/// PUT    /{id}                             -> update
/// DELETE /{id}                             -> delete
/// POST   /{id}/projects/{project_id}       -> add_project
/// DELETE /{id}/projects/{project_id}       -> remove_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project_collection::list).post(project_collection::create),
        )
        .route(
            "/{id}",
            get(project_collection::get_by_id)
                .put(project_collection::update)
                .delete(project_collection::delete),
        )
        .route(
            "/{id}/projects/{project_id}",
            post(project_collection::add_project).delete(project_collection::remove_project),
        )
}
