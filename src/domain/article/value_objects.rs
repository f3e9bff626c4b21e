use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Editorial state of an article. Stored as a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    #[default]
    Approved,
    Submitted,
    Draft,
    Rejected,
}

impl ArticleStatus {
    pub const fn code(self) -> i32 {
        match self {
            Self::Approved => 1,
            Self::Submitted => 2,
            Self::Draft => 3,
            Self::Rejected => 4,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Approved),
            2 => Some(Self::Submitted),
            3 => Some(Self::Draft),
            4 => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl TryFrom<i32> for ArticleStatus {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
            .ok_or_else(|| DomainError::Validation(format!("unknown article status code {code}")))
    }
}
