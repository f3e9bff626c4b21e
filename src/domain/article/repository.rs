use crate::domain::article::entity::Article;
use crate::domain::article::filter::ArticleCriteria;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleStatus};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(
        &self,
        id: ArticleId,
        status: ArticleStatus,
    ) -> DomainResult<Option<Article>>;
    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
        status: ArticleStatus,
    ) -> DomainResult<Option<Article>>;
    /// One page of matching articles plus the total number of matches.
    async fn list_paginated(&self, criteria: &ArticleCriteria)
    -> DomainResult<(Vec<Article>, u64)>;
    /// Non-empty `health_topics` fields of every article in `status`.
    async fn topic_fields(&self, status: ArticleStatus) -> DomainResult<Vec<String>>;
}
