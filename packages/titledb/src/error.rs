use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by catalog operations.
///
/// Nothing here is retried; callers map these onto their own request-level
/// failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input rejected before reaching storage.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A unique column already holds the value.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller's principals are not granted the permission.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The registered view catalog is inconsistent.
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
