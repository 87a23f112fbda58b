use crate::db::error::DbError;
use serde::Serialize;
use thiserror::Error;

pub type AppResult<T> = Result<T, DomainError>;

/// A single field-level validation failure. Write requests collect one of
/// these per invalid field and reject the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    /// Referenced record does not exist ("room", "category", ...)
    #[error("not found: {0}")]
    NotFound(&'static str),

    /// Acting account is not allowed to touch the record
    #[error("permission denied")]
    PermissionDenied,

    /// No or invalid credentials on a write request
    #[error("not authenticated")]
    Unauthorized,

    /// Single-field validation failure
    #[error("validation failed: {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// Multi-field validation failure, one entry per invalid field
    #[error("validation failed on {} field(s)", .0.len())]
    ValidationFailed(Vec<FieldError>),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Password(#[from] password_hash::Error),
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse file: {0}")]
    Parse(toml::de::Error),

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),
}
