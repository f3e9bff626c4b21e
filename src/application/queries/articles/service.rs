use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, topic::TopicIdentifierService};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) topic_resolver: Arc<TopicIdentifierService>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        topic_resolver: Arc<TopicIdentifierService>,
    ) -> Self {
        Self {
            read_repo,
            topic_resolver,
        }
    }
}
