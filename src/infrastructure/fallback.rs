// src/infrastructure/fallback.rs
//! Topic catalog bundled into the binary, served when MySQL cannot be used.

use crate::domain::article::ArticleStatus;
use crate::domain::topic::{FallbackTopicSource, HealthTopic, TopicId};
use chrono::Utc;
use serde::Deserialize;

const BUNDLED_TOPICS: &str = include_str!("../../data/dummy/health-topics.json");
const BUNDLED_ARTICLES: &str = include_str!("../../data/dummy/articles.json");

#[derive(Debug, Deserialize)]
struct TopicRecord {
    id: i64,
    #[serde(default, alias = "name")]
    title: String,
    slug: String,
    #[serde(default, alias = "description")]
    body: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleRecord {
    #[serde(default)]
    health_topics: Option<String>,
    #[serde(default)]
    status: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct StaticTopicCatalog {
    topics: Vec<HealthTopic>,
    article_topic_fields: Vec<String>,
}

impl StaticTopicCatalog {
    /// The catalog shipped in `data/dummy`. A malformed bundle is logged and
    /// yields an empty catalog rather than stopping the server.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_TOPICS, BUNDLED_ARTICLES).unwrap_or_else(|err| {
            tracing::error!(error = %err, "bundled topic data is malformed");
            Self::default()
        })
    }

    pub fn from_json(topics: &str, articles: &str) -> Result<Self, serde_json::Error> {
        let topic_records: Vec<TopicRecord> = serde_json::from_str(topics)?;
        let article_records: Vec<ArticleRecord> = serde_json::from_str(articles)?;
        let now = Utc::now();

        let topics = topic_records
            .into_iter()
            .map(|record| HealthTopic {
                id: TopicId(record.id),
                title: record.title,
                slug: record.slug,
                body: record.body,
                image: record.image,
                status: None,
                is_major_health_event: false,
                created_by: None,
                updated_by: None,
                created_at: now,
                updated_at: now,
            })
            .collect();

        // Records without a status are treated as published.
        let approved = ArticleStatus::Approved.code();
        let article_topic_fields = article_records
            .into_iter()
            .filter(|record| record.status.unwrap_or(approved) == approved)
            .filter_map(|record| record.health_topics)
            .filter(|field| !field.trim().is_empty())
            .collect();

        Ok(Self {
            topics,
            article_topic_fields,
        })
    }
}

impl FallbackTopicSource for StaticTopicCatalog {
    fn topics(&self) -> Vec<HealthTopic> {
        self.topics.clone()
    }

    fn article_topic_fields(&self) -> Vec<String> {
        self.article_topic_fields.clone()
    }
}
