//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by the row store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write referenced a row that does not exist
    #[error("Foreign key constraint violated")]
    ForeignKeyViolation,

    /// Store configuration rejected before connecting
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return StoreError::ForeignKeyViolation;
            }
        }
        StoreError::Database(err)
    }
}
