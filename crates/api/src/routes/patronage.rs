//! Route definitions for the `/patronages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::patronage;
use crate::state::AppState;

/// Routes mounted at `/patronages`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(patronage::list).post(patronage::create))
        .route(
            "/{id}",
            get(patronage::get_by_id)
                .put(patronage::update)
                .delete(patronage::delete),
        )
}
