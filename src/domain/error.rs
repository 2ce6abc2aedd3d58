// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Flashcard not found: {0}")]
    NotFound(i64),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Store error: {0}")]
    Store(String),
}

impl From<rusqlite::Error> for DomainError {
    fn from(err: rusqlite::Error) -> Self {
        DomainError::Store(err.to_string())
    }
}
