use crate::domain::article::ArticleStatus;
use crate::domain::errors::DomainResult;
use crate::domain::topic::entity::{HealthTopic, HealthTopicFilter};
use crate::domain::topic::value_objects::TopicId;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait HealthTopicReadRepository: Send + Sync {
    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<HealthTopic>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<HealthTopic>>;
    /// Case-insensitive match on slug or title. Lowest id wins.
    async fn find_id_by_name(&self, name: &str) -> DomainResult<Option<TopicId>>;
    async fn list_paginated(
        &self,
        filter: &HealthTopicFilter,
    ) -> DomainResult<(Vec<HealthTopic>, u64)>;
    async fn list_all(&self) -> DomainResult<Vec<HealthTopic>>;
    /// Article counts per topic from the `article_health_topics` join table.
    async fn article_counts(&self, status: ArticleStatus) -> DomainResult<HashMap<TopicId, u64>>;
    async fn ping(&self) -> DomainResult<()>;
}

/// Bundled catalog served when the database cannot be used.
pub trait FallbackTopicSource: Send + Sync {
    fn topics(&self) -> Vec<HealthTopic>;
    fn article_topic_fields(&self) -> Vec<String>;
}
