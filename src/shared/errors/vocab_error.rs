use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum VocabError {
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Media too large: {0}")]
    TooLarge(String),

    #[error("Unsupported media format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid comment: {0}")]
    InvalidComment(String),

    #[error("Media release failed: {0}")]
    ReleaseFailed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<diesel::result::Error> for VocabError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::NotFound => VocabError::NotFound("Record not found in database".to_string()),
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                VocabError::DuplicateEntry(info.message().to_string())
            }
            _ => VocabError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for VocabError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        VocabError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<uuid::Error> for VocabError {
    fn from(err: uuid::Error) -> Self {
        VocabError::ValidationError(format!("Invalid UUID: {}", err))
    }
}

impl From<tokio::task::JoinError> for VocabError {
    fn from(err: tokio::task::JoinError) -> Self {
        VocabError::InternalError(format!("Blocking task failed: {}", err))
    }
}

impl From<serde_json::Error> for VocabError {
    fn from(err: serde_json::Error) -> Self {
        VocabError::InternalError(format!("Serialization error: {}", err))
    }
}

// Result type alias for convenience
pub type VocabResult<T> = Result<T, VocabError>;
