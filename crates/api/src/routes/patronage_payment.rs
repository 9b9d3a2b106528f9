//! Route definitions for the `/patronage-payments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::patronage_payment;
use crate::state::AppState;

/// Routes mounted at `/patronage-payments`.
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
        .route(
            "/",
            get(patronage_payment::list).post(patronage_payment::create),
        )
        .route(
            "/{id}",
            get(patronage_payment::get_by_id)
                .put(patronage_payment::update)
                .delete(patronage_payment::delete),
        )
}
