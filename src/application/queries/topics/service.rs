use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{
    article::{ArticleReadRepository, ArticleStatus, membership},
    errors::DomainResult,
    topic::{FallbackTopicSource, HealthTopicReadRepository, TopicId},
};

pub struct HealthTopicQueryService {
    pub(super) topic_repo: Arc<dyn HealthTopicReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) fallback: Arc<dyn FallbackTopicSource>,
}

impl HealthTopicQueryService {
    pub fn new(
        topic_repo: Arc<dyn HealthTopicReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        fallback: Arc<dyn FallbackTopicSource>,
    ) -> Self {
        Self {
            topic_repo,
            article_repo,
            fallback,
        }
    }

    /// Approved article counts for `topics`, from one scan of the
    /// denormalized topic column.
    // TODO: switch to the article_health_topics aggregate once every article
    // row is mirrored into the join table.
    pub(super) async fn count_articles(
        &self,
        topics: &[TopicId],
    ) -> DomainResult<HashMap<TopicId, u64>> {
        let fields = self.article_repo.topic_fields(ArticleStatus::Approved).await?;
        Ok(membership::count_by_topic(
            fields.iter().map(String::as_str),
            topics,
        ))
    }
}
