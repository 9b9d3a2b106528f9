//! Prometheus exposition endpoint.

use axum::extract::State;
use axum::{routing::get, Router};

use crate::state::AppState;

/// GET /metrics -- renders the current registry in the Prometheus text format.
async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}

/// Mount the metrics route (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(render_metrics))
}
