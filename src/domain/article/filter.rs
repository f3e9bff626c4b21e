// src/domain/article/filter.rs
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::pagination::PageRequest;
use crate::domain::topic::{TopicId, TopicSelector};

/// Columns an article listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    ApprovalDate,
    Rating,
}

impl SortColumn {
    /// Unknown names fall back to `created_at`. The returned column name is
    /// always one of the fixed identifiers below, never client text.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("updated_at") => Self::UpdatedAt,
            Some("title") => Self::Title,
            Some("approval_date") => Self::ApprovalDate,
            Some("article_ratings" | "rating") => Self::Rating,
            _ => Self::CreatedAt,
        }
    }

    pub const fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
            Self::ApprovalDate => "approval_date",
            Self::Rating => "article_ratings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Canonical article listing filter, before topic names are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: ArticleStatus,
    pub search: Option<String>,
    pub topics: Vec<TopicSelector>,
    pub sort: SortSpec,
    pub page: PageRequest,
}

impl ArticleFilter {
    pub fn into_criteria(self, topics: TopicScope) -> ArticleCriteria {
        ArticleCriteria {
            status: self.status,
            search: self.search,
            topics,
            sort: self.sort,
            page: self.page,
        }
    }
}

/// The topic dimension of a listing after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicScope {
    /// No topic filter was requested.
    All,
    /// Articles tagged with at least one of these topics.
    AnyOf(Vec<TopicId>),
    /// Topics were requested but none of them exist: nothing matches.
    Unmatched,
}

/// Fully resolved listing criteria handed to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCriteria {
    pub status: ArticleStatus,
    pub search: Option<String>,
    pub topics: TopicScope,
    pub sort: SortSpec,
    pub page: PageRequest,
}
