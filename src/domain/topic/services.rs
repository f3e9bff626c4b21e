// src/domain/topic/services.rs
use std::sync::Arc;

use crate::domain::article::TopicScope;
use crate::domain::topic::repository::HealthTopicReadRepository;
use crate::domain::topic::value_objects::{TopicId, TopicSelector};

/// Domain service turning client topic selectors into topic ids.
pub struct TopicIdentifierService {
    read_repo: Arc<dyn HealthTopicReadRepository>,
}

impl TopicIdentifierService {
    pub fn new(read_repo: Arc<dyn HealthTopicReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Lookup failures count as "no match" so a broken topic table degrades
    /// the filter instead of failing the request.
    pub async fn resolve(&self, selector: &TopicSelector) -> Option<TopicId> {
        match selector {
            TopicSelector::Id(id) => Some(*id),
            TopicSelector::Name(name) => match self.read_repo.find_id_by_name(name).await {
                Ok(found) => {
                    if found.is_none() {
                        tracing::debug!(topic = %name, "topic selector did not resolve");
                    }
                    found
                }
                Err(err) => {
                    tracing::warn!(topic = %name, error = %err, "topic lookup failed");
                    None
                }
            },
        }
    }

    pub async fn resolve_all(&self, selectors: &[TopicSelector]) -> TopicScope {
        if selectors.is_empty() {
            return TopicScope::All;
        }

        let mut ids: Vec<TopicId> = Vec::with_capacity(selectors.len());
        for selector in selectors {
            if let Some(id) = self.resolve(selector).await {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }

        if ids.is_empty() {
            TopicScope::Unmatched
        } else {
            TopicScope::AnyOf(ids)
        }
    }
}
