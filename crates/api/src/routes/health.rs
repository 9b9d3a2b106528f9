//! Aggregated health endpoint.
//!
//! Pings the database and runs one liveness probe per entity service (its
//! `list` operation). Returns 200 with a per-check breakdown when everything
//! passes, 503 otherwise.

use std::future::Future;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use patron_db::repositories::{
    PatronagePaymentRepo, PatronageRepo, ProjectCollectionRepo, ProjectRepo, UserRepo,
};

use crate::state::AppState;

/// Outcome of a single dependency check.
#[derive(Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub status: &'static str,
    /// Error message for a failed check; omitted when healthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration_ms: u64,
}

/// Aggregated health report.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Per-dependency breakdown.
    pub checks: Vec<CheckResult>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let pool = &state.pool;

    let checks = vec![
        run_check("database", patron_db::health_check(pool)).await,
        run_check("user-service", async {
            UserRepo::list(pool).await.map(|_| ())
        })
        .await,
        run_check("project-service", async {
            ProjectRepo::list(pool).await.map(|_| ())
        })
        .await,
        run_check("collection-service", async {
            ProjectCollectionRepo::list(pool).await.map(|_| ())
        })
        .await,
        run_check("patronage-service", async {
            PatronageRepo::list(pool).await.map(|_| ())
        })
        .await,
        run_check("payment-service", async {
            PatronagePaymentRepo::list(pool).await.map(|_| ())
        })
        .await,
    ];

    let healthy = checks.iter().all(|check| check.status == "healthy");
    let (status_code, status) = if healthy {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }),
    )
}

/// Run one check, timing it and converting the error into diagnostics.
async fn run_check<F>(name: &'static str, fut: F) -> CheckResult
where
    F: Future<Output = Result<(), sqlx::Error>>,
{
    let start = Instant::now();
    let result = fut.await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => CheckResult {
            name,
            status: "healthy",
            description: None,
            duration_ms,
        },
        Err(err) => {
            tracing::warn!(check = name, error = %err, "Health check failed");
            CheckResult {
                name,
                status: "unhealthy",
                description: Some(err.to_string()),
                duration_ms,
            }
        }
    }
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
