//! Cross-cutting request middleware.
//!
//! - [`observability::track_requests`] -- per-request metrics and the
//!   completion log line.

pub mod observability;
