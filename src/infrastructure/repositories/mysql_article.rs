// src/infrastructure/repositories/mysql_article.rs
use super::map_sqlx;
use super::query::{self, ARTICLE_COLUMNS};
use crate::domain::article::{
    Article, ArticleCriteria, ArticleId, ArticleReadRepository, ArticleSlug, ArticleStatus,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySqlPool};

#[derive(Clone)]
pub struct MySqlArticleReadRepository {
    pool: MySqlPool,
}

impl MySqlArticleReadRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    writer_id: Option<i64>,
    title: String,
    slug: String,
    short_description: Option<String>,
    description: Option<String>,
    health_topics: Option<String>,
    article_ratings: Option<String>,
    status: i32,
    image: Option<String>,
    approval_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let status = ArticleStatus::from_code(row.status).ok_or_else(|| {
            DomainError::Persistence(format!(
                "article {} has unknown status {}",
                row.id, row.status
            ))
        })?;
        Ok(Self {
            id: ArticleId(row.id),
            writer_id: row.writer_id,
            title: row.title,
            slug: ArticleSlug::new(row.slug)
                .map_err(|err| DomainError::Persistence(err.to_string()))?,
            short_description: row.short_description,
            description: row.description,
            health_topics: row.health_topics,
            article_ratings: row.article_ratings,
            status,
            image: row.image,
            approval_date: row.approval_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleReadRepository for MySqlArticleReadRepository {
    async fn find_by_id(
        &self,
        id: ArticleId,
        status: ArticleStatus,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ? AND status = ? LIMIT 1"
        ))
        .bind(i64::from(id))
        .bind(status.code())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
        status: ArticleStatus,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ? AND status = ? LIMIT 1"
        ))
        .bind(slug.as_str())
        .bind(status.code())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_paginated(
        &self,
        criteria: &ArticleCriteria,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut page = query::select_page(criteria);
        let rows = page
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count = query::count_matching(criteria);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((articles, u64::try_from(total).unwrap_or(0)))
    }

    async fn topic_fields(&self, status: ArticleStatus) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT health_topics FROM articles
             WHERE status = ? AND health_topics IS NOT NULL AND health_topics <> ''",
        )
        .bind(status.code())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
