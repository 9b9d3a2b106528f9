//! Route definitions, one module per resource.

pub mod health;
pub mod metrics;
pub mod patronage;
pub mod patronage_payment;
pub mod project;
pub mod project_collection;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                        list, create
/// /users/{id}                                   get, update, delete
///
/// /projects                                     list, create
/// /projects/{id}                                get, update, delete
///
/// /project-collections                          list, create
/// /project-collections/{id}                     get, update, delete
/// /project-collections/{id}/projects/{project_id}   add (POST), remove (DELETE)
///
/// /patronages                                   list, create
/// /patronages/{id}                              get, update, delete
///
/// /patronage-payments                           list, create
/// /patronage-payments/{id}                      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/projects", project::router())
        .nest("/project-collections", project_collection::router())
        .nest("/patronages", patronage::router())
        .nest("/patronage-payments", patronage_payment::router())
}
