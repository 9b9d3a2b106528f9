//! Well-known metric name constants.
//!
//! These are the canonical names exposed on the Prometheus endpoint. Keeping
//! them in one place stops handler and middleware code from drifting apart
//! on spelling.

// Per-entity mutation counters.
pub const USERS_CREATED_TOTAL: &str = "patron_users_created_total";
pub const USERS_UPDATED_TOTAL: &str = "patron_users_updated_total";
pub const USERS_DELETED_TOTAL: &str = "patron_users_deleted_total";

pub const PROJECTS_CREATED_TOTAL: &str = "patron_projects_created_total";
pub const PROJECTS_UPDATED_TOTAL: &str = "patron_projects_updated_total";
pub const PROJECTS_DELETED_TOTAL: &str = "patron_projects_deleted_total";

pub const COLLECTIONS_CREATED_TOTAL: &str = "patron_collections_created_total";
pub const COLLECTIONS_UPDATED_TOTAL: &str = "patron_collections_updated_total";
pub const COLLECTIONS_DELETED_TOTAL: &str = "patron_collections_deleted_total";

pub const PATRONAGES_CREATED_TOTAL: &str = "patron_patronages_created_total";
pub const PATRONAGES_UPDATED_TOTAL: &str = "patron_patronages_updated_total";
pub const PATRONAGES_DELETED_TOTAL: &str = "patron_patronages_deleted_total";

pub const PAYMENTS_CREATED_TOTAL: &str = "patron_payments_created_total";
pub const PAYMENTS_UPDATED_TOTAL: &str = "patron_payments_updated_total";
pub const PAYMENTS_DELETED_TOTAL: &str = "patron_payments_deleted_total";

// API request metrics, labelled by endpoint / method / status_code.
pub const API_REQUESTS_TOTAL: &str = "patron_api_requests_total";
pub const API_REQUEST_DURATION_SECONDS: &str = "patron_api_request_duration_seconds";
