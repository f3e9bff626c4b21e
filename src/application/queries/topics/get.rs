use super::HealthTopicQueryService;
use crate::{
    application::{
        dto::HealthTopicDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        lookup::EntityKey,
        topic::TopicId,
    },
};

pub struct GetHealthTopicQuery {
    pub key: String,
}

impl HealthTopicQueryService {
    pub async fn get_health_topic(
        &self,
        query: GetHealthTopicQuery,
    ) -> ApplicationResult<HealthTopicDto> {
        let found = match EntityKey::parse(&query.key) {
            EntityKey::Id(raw) => match TopicId::new(raw) {
                Ok(id) => self.topic_repo.find_by_id(id).await?,
                Err(_) => None,
            },
            EntityKey::Slug(slug) if slug.is_empty() => None,
            EntityKey::Slug(slug) => self.topic_repo.find_by_slug(&slug).await?,
        };

        let topic = found.ok_or_else(|| ApplicationError::not_found("Health topic not found"))?;
        let counts = self.count_articles(&[topic.id]).await?;
        let article_count = counts.get(&topic.id).copied().unwrap_or(0);
        Ok(HealthTopicDto::new(topic, article_count))
    }
}
