//! Prometheus recorder installation and metric registration.
//!
//! Metric *names* live in [`patron_core::metric_names`]; this module owns the
//! recorder lifecycle and the exposition-side configuration (descriptions,
//! histogram buckets).

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use patron_core::metric_names;

/// Histogram buckets for API request duration, in seconds.
const DURATION_BUCKETS: &[f64] = &[0.1, 0.5, 1.0, 2.0, 5.0];

/// Install the process-global Prometheus recorder and return its handle.
///
/// Call once at startup, before the router is built. Fails if a recorder
/// is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = builder()?.install_recorder()?;
    describe_metrics();
    Ok(handle)
}

/// Build a handle without installing the recorder globally.
///
/// Used by the test harness, where each test binary would otherwise race to
/// install the single process-global recorder.
pub fn build_handle() -> Result<PrometheusHandle, BuildError> {
    Ok(builder()?.build_recorder().handle())
}

fn builder() -> Result<PrometheusBuilder, BuildError> {
    PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full(metric_names::API_REQUEST_DURATION_SECONDS.to_string()),
        DURATION_BUCKETS,
    )
}

fn describe_metrics() {
    describe_counter!(
        metric_names::USERS_CREATED_TOTAL,
        "Total number of users created"
    );
    describe_counter!(
        metric_names::USERS_UPDATED_TOTAL,
        "Total number of user updates"
    );
    describe_counter!(
        metric_names::USERS_DELETED_TOTAL,
        "Total number of users deleted"
    );
    describe_counter!(
        metric_names::PROJECTS_CREATED_TOTAL,
        "Total number of projects created"
    );
    describe_counter!(
        metric_names::PROJECTS_UPDATED_TOTAL,
        "Total number of project updates"
    );
    describe_counter!(
        metric_names::PROJECTS_DELETED_TOTAL,
        "Total number of projects deleted"
    );
    describe_counter!(
        metric_names::COLLECTIONS_CREATED_TOTAL,
        "Total number of project collections created"
    );
    describe_counter!(
        metric_names::COLLECTIONS_UPDATED_TOTAL,
        "Total number of project collection updates"
    );
    describe_counter!(
        metric_names::COLLECTIONS_DELETED_TOTAL,
        "Total number of project collections deleted"
    );
    describe_counter!(
        metric_names::PATRONAGES_CREATED_TOTAL,
        "Total number of patronages created"
    );
    describe_counter!(
        metric_names::PATRONAGES_UPDATED_TOTAL,
        "Total number of patronage updates"
    );
    describe_counter!(
        metric_names::PATRONAGES_DELETED_TOTAL,
        "Total number of patronages deleted"
    );
    describe_counter!(
        metric_names::PAYMENTS_CREATED_TOTAL,
        "Total number of payments created"
    );
    describe_counter!(
        metric_names::PAYMENTS_UPDATED_TOTAL,
        "Total number of payment updates"
    );
    describe_counter!(
        metric_names::PAYMENTS_DELETED_TOTAL,
        "Total number of payments deleted"
    );
    describe_counter!(
        metric_names::API_REQUESTS_TOTAL,
        "Total number of API requests"
    );
    describe_histogram!(
        metric_names::API_REQUEST_DURATION_SECONDS,
        "API request duration in seconds"
    );
}
