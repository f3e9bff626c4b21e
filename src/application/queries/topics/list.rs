use super::HealthTopicQueryService;
use crate::{
    application::{
        dto::{HealthTopicDto, Listing, OffsetPaginationDto},
        error::ApplicationResult,
    },
    domain::{
        errors::DomainResult,
        pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, OffsetWindow},
        topic::{HealthTopicFilter, TopicId},
    },
};

/// Raw health topic listing parameters.
#[derive(Debug, Clone, Default)]
pub struct ListHealthTopicsQuery {
    pub status: Option<String>,
    pub is_major_health_event: Option<String>,
    pub search: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListHealthTopicsQuery {
    pub fn into_filter(self) -> HealthTopicFilter {
        let status = self
            .status
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i32>().ok());
        let major_event = self
            .is_major_health_event
            .as_deref()
            .map(|raw| raw.trim() == "1");
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(ToString::to_string);
        let limit = self
            .limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        let offset = self
            .offset
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0);

        HealthTopicFilter {
            status,
            major_event,
            search,
            limit,
            offset,
        }
    }
}

impl HealthTopicQueryService {
    pub async fn list_health_topics(
        &self,
        query: ListHealthTopicsQuery,
    ) -> ApplicationResult<Listing<HealthTopicDto, OffsetPaginationDto>> {
        let filter = query.into_filter();

        match self.load_page(&filter).await {
            Ok((items, total)) => Ok(Listing::Available {
                items,
                pagination: OffsetWindow::new(total, filter.limit, filter.offset).into(),
            }),
            Err(err) if err.is_source_failure() => {
                tracing::error!(error = %err, "health topic listing degraded, data source unavailable");
                Ok(Listing::SourceUnavailable {
                    pagination: OffsetWindow::new(0, filter.limit, filter.offset).into(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn load_page(
        &self,
        filter: &HealthTopicFilter,
    ) -> DomainResult<(Vec<HealthTopicDto>, u64)> {
        let (topics, total) = self.topic_repo.list_paginated(filter).await?;
        let ids: Vec<TopicId> = topics.iter().map(|topic| topic.id).collect();
        let counts = self.count_articles(&ids).await?;

        let items = topics
            .into_iter()
            .map(|topic| {
                let count = counts.get(&topic.id).copied().unwrap_or(0);
                HealthTopicDto::new(topic, count)
            })
            .collect();
        Ok((items, total))
    }
}
