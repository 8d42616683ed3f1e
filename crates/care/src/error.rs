use plauntie_core::error::CoreError;

/// Errors from registry and reminder engine operations.
#[derive(Debug, thiserror::Error)]
pub enum CareError {
    /// A domain-level error (not found, validation, conflict).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type CareResult<T> = Result<T, CareError>;
