// tests/support/mocks/topic_repos.rs
use async_trait::async_trait;
use medinlife_api::domain::article::ArticleStatus;
use medinlife_api::domain::errors::{DomainError, DomainResult};
use medinlife_api::domain::topic::{
    HealthTopic, HealthTopicFilter, HealthTopicReadRepository, TopicId,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/* -------------------------------- InMemoryTopicRead -------------------------------- */

pub struct InMemoryTopicRead {
    topics: Vec<HealthTopic>,
    /// `None` behaves like a database without the join table.
    join_counts: Option<HashMap<TopicId, u64>>,
    name_lookups: AtomicUsize,
}

impl InMemoryTopicRead {
    pub fn new(topics: Vec<HealthTopic>) -> Self {
        Self {
            topics,
            join_counts: None,
            name_lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_join_counts(mut self, counts: &[(i64, u64)]) -> Self {
        self.join_counts = Some(
            counts
                .iter()
                .map(|(topic, count)| (TopicId(*topic), *count))
                .collect(),
        );
        self
    }

    pub fn name_lookups(&self) -> usize {
        self.name_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HealthTopicReadRepository for InMemoryTopicRead {
    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<HealthTopic>> {
        Ok(self.topics.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<HealthTopic>> {
        Ok(self.topics.iter().find(|t| t.slug == slug).cloned())
    }

    async fn find_id_by_name(&self, name: &str) -> DomainResult<Option<TopicId>> {
        self.name_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .topics
            .iter()
            .filter(|t| t.slug.eq_ignore_ascii_case(name) || t.title.eq_ignore_ascii_case(name))
            .map(|t| t.id)
            .min())
    }

    async fn list_paginated(
        &self,
        filter: &HealthTopicFilter,
    ) -> DomainResult<(Vec<HealthTopic>, u64)> {
        let term = filter.search.as_deref().map(str::to_lowercase);
        let mut matching: Vec<HealthTopic> = self
            .topics
            .iter()
            .filter(|t| filter.status.is_none_or(|s| t.status == Some(s)))
            .filter(|t| filter.major_event.is_none_or(|m| t.is_major_health_event == m))
            .filter(|t| {
                term.as_deref().is_none_or(|term| {
                    t.title.to_lowercase().contains(term)
                        || t.body
                            .as_deref()
                            .is_some_and(|body| body.to_lowercase().contains(term))
                })
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn list_all(&self) -> DomainResult<Vec<HealthTopic>> {
        let mut all = self.topics.clone();
        all.sort_by_key(|t| t.id);
        Ok(all)
    }

    async fn article_counts(&self, _status: ArticleStatus) -> DomainResult<HashMap<TopicId, u64>> {
        self.join_counts.clone().ok_or_else(|| {
            DomainError::Persistence("missing table: article_health_topics".into())
        })
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}

/* -------------------------------- FailingTopicRead -------------------------------- */

pub struct FailingTopicRead;

fn unreachable_db() -> DomainError {
    DomainError::Unavailable("connection refused".into())
}

#[async_trait]
impl HealthTopicReadRepository for FailingTopicRead {
    async fn find_by_id(&self, _id: TopicId) -> DomainResult<Option<HealthTopic>> {
        Err(unreachable_db())
    }

    async fn find_by_slug(&self, _slug: &str) -> DomainResult<Option<HealthTopic>> {
        Err(unreachable_db())
    }

    async fn find_id_by_name(&self, _name: &str) -> DomainResult<Option<TopicId>> {
        Err(unreachable_db())
    }

    async fn list_paginated(
        &self,
        _filter: &HealthTopicFilter,
    ) -> DomainResult<(Vec<HealthTopic>, u64)> {
        Err(unreachable_db())
    }

    async fn list_all(&self) -> DomainResult<Vec<HealthTopic>> {
        Err(unreachable_db())
    }

    async fn article_counts(&self, _status: ArticleStatus) -> DomainResult<HashMap<TopicId, u64>> {
        Err(unreachable_db())
    }

    async fn ping(&self) -> DomainResult<()> {
        Err(unreachable_db())
    }
}
