use super::HealthTopicQueryService;
use crate::{
    application::{dto::TopicSummaryDto, error::ApplicationResult},
    domain::{
        article::{ArticleStatus, membership},
        topic::{HealthTopic, TopicId},
    },
};
use chrono::Utc;
use std::collections::HashMap;

pub struct TopicCatalogQuery {
    pub include_count: bool,
}

impl TopicCatalogQuery {
    /// Counts are on unless the flag is literally `false`.
    pub fn from_flag(raw: Option<&str>) -> Self {
        Self {
            include_count: raw.is_none_or(|value| value.trim() != "false"),
        }
    }
}

impl HealthTopicQueryService {
    pub async fn topic_catalog(
        &self,
        query: TopicCatalogQuery,
    ) -> ApplicationResult<Vec<TopicSummaryDto>> {
        if let Err(err) = self.topic_repo.ping().await {
            tracing::warn!(error = %err, "database unreachable, serving bundled topic catalog");
            return Ok(self.bundled_catalog(query.include_count));
        }

        let topics = self.topic_repo.list_all().await?;
        if topics.is_empty() {
            return self.derived_catalog(query.include_count).await;
        }

        if !query.include_count {
            return Ok(topics
                .into_iter()
                .map(|topic| TopicSummaryDto::new(topic, 0))
                .collect());
        }

        match self.topic_repo.article_counts(ArticleStatus::Approved).await {
            Ok(counts) => Ok(topics
                .into_iter()
                .map(|topic| {
                    let count = counts.get(&topic.id).copied().unwrap_or(0);
                    TopicSummaryDto::new(topic, count)
                })
                .collect()),
            Err(err) => {
                tracing::warn!(error = %err, "article_health_topics unavailable, serving bundled topic catalog");
                Ok(self.bundled_catalog(true))
            }
        }
    }

    fn bundled_catalog(&self, include_count: bool) -> Vec<TopicSummaryDto> {
        let mut topics = self.fallback.topics();
        topics.sort_by_key(|topic| topic.id);

        let counts = if include_count {
            let ids: Vec<TopicId> = topics.iter().map(|topic| topic.id).collect();
            let fields = self.fallback.article_topic_fields();
            membership::count_by_topic(fields.iter().map(String::as_str), &ids)
        } else {
            HashMap::new()
        };

        topics
            .into_iter()
            .map(|topic| {
                let count = counts.get(&topic.id).copied().unwrap_or(0);
                TopicSummaryDto::new(topic, count)
            })
            .collect()
    }

    /// Catalog built from the distinct tokens on approved articles, for
    /// databases whose topic table has not been populated.
    async fn derived_catalog(&self, include_count: bool) -> ApplicationResult<Vec<TopicSummaryDto>> {
        let fields = self.article_repo.topic_fields(ArticleStatus::Approved).await?;
        let tokens = membership::distinct_tokens(fields.iter().map(String::as_str));
        let now = Utc::now();

        Ok(tokens
            .into_iter()
            .zip(1_i64..)
            .map(|(token, id)| {
                let count = if include_count {
                    fields
                        .iter()
                        .filter(|field| membership::has_token(field, &token))
                        .count() as u64
                } else {
                    0
                };
                let topic = HealthTopic {
                    id: TopicId(id),
                    slug: slug::slugify(&token),
                    title: token,
                    body: None,
                    image: None,
                    status: None,
                    is_major_health_event: false,
                    created_by: None,
                    updated_by: None,
                    created_at: now,
                    updated_at: now,
                };
                TopicSummaryDto::new(topic, count)
            })
            .collect())
    }
}
