//! Request-level observability: per-endpoint counters, a latency histogram,
//! and one completion log line per request.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, histogram};
use patron_core::metric_names;

/// Record one counter increment and one histogram observation per request.
///
/// The matched route template (e.g. `/api/v1/users/{id}`) is used as the
/// endpoint label so path parameters do not blow up label cardinality.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let method = request.method().to_string();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();

    tracing::info!(
        method = %method,
        endpoint = %endpoint,
        status,
        elapsed_ms = elapsed.as_millis() as u64,
        "Request completed"
    );

    histogram!(metric_names::API_REQUEST_DURATION_SECONDS).record(elapsed.as_secs_f64());
    counter!(
        metric_names::API_REQUESTS_TOTAL,
        "endpoint" => endpoint,
        "method" => method,
        "status_code" => status.to_string()
    )
    .increment(1);

    response
}
