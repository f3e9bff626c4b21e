// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("data source unavailable: {0}")]
    Unavailable(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// True when the error came from the backing store rather than the input.
    pub const fn is_source_failure(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Persistence(_))
    }
}
