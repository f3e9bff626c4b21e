// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleStatus};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub writer_id: Option<i64>,
    pub title: String,
    pub slug: ArticleSlug,
    pub short_description: Option<String>,
    pub description: Option<String>,
    /// Comma separated topic ids; legacy rows may hold free-text names.
    pub health_topics: Option<String>,
    pub article_ratings: Option<String>,
    pub status: ArticleStatus,
    pub image: Option<String>,
    pub approval_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

