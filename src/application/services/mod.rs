// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::{articles::ArticleQueryService, topics::HealthTopicQueryService},
    domain::{
        article::ArticleReadRepository,
        topic::{FallbackTopicSource, HealthTopicReadRepository, TopicIdentifierService},
    },
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub topic_queries: Arc<HealthTopicQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        topic_read_repo: Arc<dyn HealthTopicReadRepository>,
        fallback_topics: Arc<dyn FallbackTopicSource>,
    ) -> Self {
        let topic_resolver = Arc::new(TopicIdentifierService::new(Arc::clone(&topic_read_repo)));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&topic_resolver),
        ));

        let topic_queries = Arc::new(HealthTopicQueryService::new(
            Arc::clone(&topic_read_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&fallback_topics),
        ));

        Self {
            article_queries,
            topic_queries,
        }
    }
}
