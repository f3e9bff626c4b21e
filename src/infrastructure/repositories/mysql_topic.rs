// src/infrastructure/repositories/mysql_topic.rs
use super::map_sqlx;
use super::query::like_pattern;
use crate::domain::article::ArticleStatus;
use crate::domain::errors::DomainResult;
use crate::domain::topic::{HealthTopic, HealthTopicFilter, HealthTopicReadRepository, TopicId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};
use std::collections::HashMap;

const TOPIC_COLUMNS: &str = "id, title, slug, body, image, status, is_major_health_event, \
     created_by, updated_by, created_at, updated_at";

#[derive(Clone)]
pub struct MySqlHealthTopicReadRepository {
    pool: MySqlPool,
}

impl MySqlHealthTopicReadRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn apply_filter(builder: &mut QueryBuilder<'static, MySql>, filter: &HealthTopicFilter) {
        builder.push(" WHERE 1 = 1");
        if let Some(status) = filter.status {
            builder.push(" AND status = ");
            builder.push_bind(status);
        }
        if let Some(major) = filter.major_event {
            builder.push(" AND is_major_health_event = ");
            builder.push_bind(major);
        }
        if let Some(term) = filter.search.as_deref() {
            let pattern = like_pattern(term);
            builder.push(" AND (LOWER(title) LIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR LOWER(body) LIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }
}

#[derive(Debug, FromRow)]
struct HealthTopicRow {
    id: i64,
    title: String,
    slug: String,
    body: Option<String>,
    image: Option<String>,
    status: Option<i32>,
    is_major_health_event: bool,
    created_by: Option<i64>,
    updated_by: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<HealthTopicRow> for HealthTopic {
    fn from(row: HealthTopicRow) -> Self {
        Self {
            id: TopicId(row.id),
            title: row.title,
            slug: row.slug,
            body: row.body,
            image: row.image,
            status: row.status,
            is_major_health_event: row.is_major_health_event,
            created_by: row.created_by,
            updated_by: row.updated_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl HealthTopicReadRepository for MySqlHealthTopicReadRepository {
    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<HealthTopic>> {
        let row = sqlx::query_as::<_, HealthTopicRow>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM health_topics WHERE id = ? LIMIT 1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<HealthTopic>> {
        let row = sqlx::query_as::<_, HealthTopicRow>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM health_topics WHERE slug = ? LIMIT 1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(Into::into))
    }

    async fn find_id_by_name(&self, name: &str) -> DomainResult<Option<TopicId>> {
        let id = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM health_topics
             WHERE LOWER(slug) = LOWER(?) OR LOWER(title) = LOWER(?)
             ORDER BY id ASC LIMIT 1",
        )
        .bind(name)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(id.map(TopicId))
    }

    async fn list_paginated(
        &self,
        filter: &HealthTopicFilter,
    ) -> DomainResult<(Vec<HealthTopic>, u64)> {
        let mut page = QueryBuilder::new(format!("SELECT {TOPIC_COLUMNS} FROM health_topics"));
        Self::apply_filter(&mut page, filter);
        page.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        page.push_bind(filter.limit);
        page.push(" OFFSET ");
        page.push_bind(filter.offset);

        let rows = page
            .build_query_as::<HealthTopicRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count = QueryBuilder::new("SELECT COUNT(*) FROM health_topics");
        Self::apply_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((
            rows.into_iter().map(Into::into).collect(),
            u64::try_from(total).unwrap_or(0),
        ))
    }

    async fn list_all(&self) -> DomainResult<Vec<HealthTopic>> {
        let rows = sqlx::query_as::<_, HealthTopicRow>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM health_topics ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn article_counts(&self, status: ArticleStatus) -> DomainResult<HashMap<TopicId, u64>> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            "SELECT aht.health_topic_id, COUNT(DISTINCT a.id)
             FROM article_health_topics aht
             JOIN articles a ON a.id = aht.article_id
             WHERE a.status = ?
             GROUP BY aht.health_topic_id",
        )
        .bind(status.code())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|(topic, count)| (TopicId(topic), u64::try_from(count).unwrap_or(0)))
            .collect())
    }

    async fn ping(&self) -> DomainResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
