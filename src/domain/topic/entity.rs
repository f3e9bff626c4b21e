// src/domain/topic/entity.rs
use crate::domain::topic::value_objects::TopicId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct HealthTopic {
    pub id: TopicId,
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
}

/// Filters for the health topic listing. Every present field narrows the
/// result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthTopicFilter {
    pub status: Option<i32>,
    pub major_event: Option<bool>,
    pub search: Option<String>,
    pub limit: u32,
    pub offset: u64,
}
