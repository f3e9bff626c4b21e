use crate::domain::topic::HealthTopic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A health topic with the number of approved articles tagged with it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthTopicDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: Option<String>,
    pub image: Option<String>,
    pub status: Option<i32>,
    pub is_major_health_event: bool,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub article_count: u64,
}

impl HealthTopicDto {
    pub fn new(topic: HealthTopic, article_count: u64) -> Self {
        Self {
            id: topic.id.into(),
            title: topic.title,
            slug: topic.slug,
            body: topic.body,
            image: topic.image,
            status: topic.status,
            is_major_health_event: topic.is_major_health_event,
            created_by: topic.created_by,
            updated_by: topic.updated_by,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
            article_count,
        }
    }
}

/// Entry of the `/topics` catalog.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicSummaryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "articleCount")]
    pub article_count: u64,
}

impl TopicSummaryDto {
    pub fn new(topic: HealthTopic, article_count: u64) -> Self {
        let name = if topic.title.trim().is_empty() {
            format!("Topic {}", topic.id)
        } else {
            topic.title
        };
        Self {
            id: topic.id.into(),
            name,
            slug: topic.slug,
            description: topic.body,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
            article_count,
        }
    }
}
