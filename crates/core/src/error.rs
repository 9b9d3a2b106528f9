use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Persistence errors stay `sqlx::Error` until they cross into the HTTP
/// layer; everything the application itself can diagnose is one of these.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested row does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The input failed validation (malformed fields, identifier mismatch).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
