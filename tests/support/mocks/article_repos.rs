// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use medinlife_api::domain::article::{
    Article, ArticleCriteria, ArticleId, ArticleReadRepository, ArticleSlug, ArticleStatus,
    SortColumn, SortDirection, TopicIdList, TopicScope,
};
use medinlife_api::domain::errors::{DomainError, DomainResult};
use std::cmp::Ordering;

/* -------------------------------- InMemoryArticleRead -------------------------------- */

/// Evaluates listing criteria in memory the way the MySQL statement does.
pub struct InMemoryArticleRead {
    articles: Vec<Article>,
}

impl InMemoryArticleRead {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    fn matches(article: &Article, criteria: &ArticleCriteria) -> bool {
        if article.status != criteria.status {
            return false;
        }
        if let Some(term) = criteria.search.as_deref() {
            let term = term.to_lowercase();
            let hit = [
                Some(article.title.as_str()),
                article.short_description.as_deref(),
                article.description.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        match &criteria.topics {
            TopicScope::All => true,
            TopicScope::AnyOf(ids) => {
                TopicIdList::parse(article.health_topics.as_deref().unwrap_or_default())
                    .intersects(ids)
            }
            TopicScope::Unmatched => false,
        }
    }

    fn compare(a: &Article, b: &Article, column: SortColumn) -> Ordering {
        let primary = match column {
            SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            SortColumn::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortColumn::Title => a.title.cmp(&b.title),
            SortColumn::ApprovalDate => a.approval_date.cmp(&b.approval_date),
            SortColumn::Rating => a.article_ratings.cmp(&b.article_ratings),
        };
        primary.then_with(|| a.id.0.cmp(&b.id.0))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRead {
    async fn find_by_id(
        &self,
        id: ArticleId,
        status: ArticleStatus,
    ) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .iter()
            .find(|a| a.id == id && a.status == status)
            .cloned())
    }

    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
        status: ArticleStatus,
    ) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .iter()
            .find(|a| &a.slug == slug && a.status == status)
            .cloned())
    }

    async fn list_paginated(
        &self,
        criteria: &ArticleCriteria,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut matching: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| Self::matches(a, criteria))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            let ord = Self::compare(a, b, criteria.sort.column);
            match criteria.sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(criteria.page.offset() as usize)
            .take(criteria.page.limit() as usize)
            .collect();
        Ok((page, total))
    }

    async fn topic_fields(&self, status: ArticleStatus) -> DomainResult<Vec<String>> {
        Ok(self
            .articles
            .iter()
            .filter(|a| a.status == status)
            .filter_map(|a| a.health_topics.clone())
            .filter(|field| !field.is_empty())
            .collect())
    }
}

/* -------------------------------- FailingArticleRead -------------------------------- */

/// Every call fails as if MySQL were unreachable.
pub struct FailingArticleRead;

fn unreachable_db() -> DomainError {
    DomainError::Unavailable("connection refused".into())
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn find_by_id(
        &self,
        _id: ArticleId,
        _status: ArticleStatus,
    ) -> DomainResult<Option<Article>> {
        Err(unreachable_db())
    }

    async fn find_by_slug(
        &self,
        _slug: &ArticleSlug,
        _status: ArticleStatus,
    ) -> DomainResult<Option<Article>> {
        Err(unreachable_db())
    }

    async fn list_paginated(
        &self,
        _criteria: &ArticleCriteria,
    ) -> DomainResult<(Vec<Article>, u64)> {
        Err(unreachable_db())
    }

    async fn topic_fields(&self, _status: ArticleStatus) -> DomainResult<Vec<String>> {
        Err(unreachable_db())
    }
}
