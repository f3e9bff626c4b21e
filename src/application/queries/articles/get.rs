use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleSlug, ArticleStatus},
        lookup::EntityKey,
    },
};

/// Fetch one published article by id or slug.
pub struct GetArticleQuery {
    pub key: String,
}

impl ArticleQueryService {
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let status = ArticleStatus::Approved;
        let found = match EntityKey::parse(&query.key) {
            EntityKey::Id(raw) => match ArticleId::new(raw) {
                Ok(id) => self.read_repo.find_by_id(id, status).await?,
                Err(_) => None,
            },
            EntityKey::Slug(raw) => match ArticleSlug::new(raw) {
                Ok(slug) => self.read_repo.find_by_slug(&slug, status).await?,
                Err(_) => None,
            },
        };

        found
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Article not found"))
    }
}
