use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: patron_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Handle for rendering the Prometheus registry at `/metrics`.
    pub metrics: PrometheusHandle,
}
