// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleDto, Listing, PaginationDto},
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{
    DATABASE_UNAVAILABLE, ErrorResponse, HttpResult, IntoHttpResult,
};
use crate::presentation::http::extractors::LenientQuery;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Every field is taken as raw text; malformed values fall back to defaults
/// instead of failing the request.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Status code, 1 (approved) when absent or unknown.
    pub status: Option<String>,
    /// Page size, default 10, at most 100.
    pub limit: Option<String>,
    /// 1-based page number.
    pub page: Option<String>,
    /// One of created_at, updated_at, title, approval_date, article_ratings.
    pub sort_by: Option<String>,
    /// asc or desc.
    pub sort_order: Option<String>,
    pub search: Option<String>,
    /// Comma separated topic ids, names or slugs. Any match qualifies.
    pub health_topic: Option<String>,
    /// Older spelling of `healthTopic`, read only when that is absent.
    #[serde(rename = "health_topic")]
    pub legacy_health_topic: Option<String>,
    /// Single topic name or slug.
    pub topic: Option<String>,
}

impl From<ArticleListParams> for ListArticlesQuery {
    fn from(params: ArticleListParams) -> Self {
        Self {
            status: params.status,
            limit: params.limit,
            page: params.page,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
            search: params.search,
            health_topic: params.health_topic.or(params.legacy_health_topic),
            topic: params.topic,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleListResponse {
    pub success: bool,
    pub data: Vec<ArticleDto>,
    pub pagination: PaginationDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Listing<ArticleDto, PaginationDto>> for ArticleListResponse {
    fn from(listing: Listing<ArticleDto, PaginationDto>) -> Self {
        match listing {
            Listing::Available { items, pagination } => Self {
                success: true,
                data: items,
                pagination,
                error: None,
            },
            Listing::SourceUnavailable { pagination } => Self {
                success: false,
                data: Vec::new(),
                pagination,
                error: Some(DATABASE_UNAVAILABLE.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleResponse {
    pub success: bool,
    pub data: ArticleDto,
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Page of articles. `success` is false when the database could not be used.", body = ArticleListResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    LenientQuery(params): LenientQuery<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let listing = state
        .services
        .article_queries
        .list_articles(params.into())
        .await
        .into_http()?;
    Ok(Json(listing.into()))
}

#[utoipa::path(
    get,
    path = "/articles/{idOrSlug}",
    params(("idOrSlug" = String, Path, description = "Numeric id or slug")),
    responses(
        (status = 200, description = "Approved article", body = ArticleResponse),
        (status = 404, description = "No approved article with that id or slug", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(key): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_queries
        .get_article(GetArticleQuery { key })
        .await
        .into_http()?;
    Ok(Json(ArticleResponse {
        success: true,
        data: article,
    }))
}
