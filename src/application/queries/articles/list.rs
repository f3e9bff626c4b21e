use super::{ArticleQueryService, ListArticlesQuery};
use crate::{
    application::{
        dto::{ArticleDto, Listing, PaginationDto},
        error::ApplicationResult,
    },
    domain::pagination::PageWindow,
};

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Listing<ArticleDto, PaginationDto>> {
        let filter = query.into_filter();
        let page = filter.page;
        let scope = self.topic_resolver.resolve_all(&filter.topics).await;
        let criteria = filter.into_criteria(scope);

        match self.read_repo.list_paginated(&criteria).await {
            Ok((records, total)) => Ok(Listing::Available {
                items: records.into_iter().map(Into::into).collect(),
                pagination: page.window(total).into(),
            }),
            Err(err) if err.is_source_failure() => {
                tracing::error!(error = %err, "article listing degraded, data source unavailable");
                Ok(Listing::SourceUnavailable {
                    pagination: PageWindow::empty(page).into(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}
