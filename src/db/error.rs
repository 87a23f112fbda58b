use deadpool_postgres::{BuildError, PoolError};
use thiserror::Error;
use tokio_postgres::error::SqlState;

// DbError is the lowest level error type, wrapping errors from the database
// layer. It does not wrap any higher level errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Record not found
    #[error("not found")]
    NotFound,

    /// Unique constraint violation
    #[error("unique violation")]
    UniqueViolation,

    /// Foreign key constraint violation, with the violated constraint's
    /// name when Postgres reports one
    #[error("foreign key violation")]
    ForeignKey(Option<String>),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Pg(tokio_postgres::Error),

    #[error(transparent)]
    Migrate(#[from] refinery::Error),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("row decode error: {0}")]
    Decode(String),

    #[error("input error: {field}: {message}")]
    Validation { field: &'static str, message: String },
}

// Constraint violations get their own variants so callers can surface them
// as validation/not-found failures instead of a raw storage error.
impl From<tokio_postgres::Error> for DbError {
    fn from(e: tokio_postgres::Error) -> Self {
        match e.code() {
            Some(&SqlState::FOREIGN_KEY_VIOLATION) => {
                let constraint = e.as_db_error().and_then(|d| d.constraint()).map(str::to_string);
                DbError::ForeignKey(constraint)
            }
            Some(&SqlState::UNIQUE_VIOLATION) => DbError::UniqueViolation,
            _ => DbError::Pg(e),
        }
    }
}
