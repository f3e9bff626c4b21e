use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub writer_id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub health_topics: Option<String>,
    pub article_ratings: Option<String>,
    pub status: i32,
    pub image: Option<String>,
    pub approval_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            writer_id: article.writer_id,
            title: article.title,
            slug: article.slug.into_inner(),
            short_description: article.short_description,
            description: article.description,
            health_topics: article.health_topics,
            article_ratings: article.article_ratings,
            status: article.status.code(),
            image: article.image,
            approval_date: article.approval_date,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
