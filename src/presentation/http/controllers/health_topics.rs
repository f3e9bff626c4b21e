// src/presentation/http/controllers/health_topics.rs
use crate::application::{
    dto::{HealthTopicDto, Listing, OffsetPaginationDto},
    queries::topics::{GetHealthTopicQuery, ListHealthTopicsQuery},
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

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct HealthTopicListParams {
    pub status: Option<String>,
    /// `1` selects major health events, any other value excludes them.
    pub is_major_health_event: Option<String>,
    /// Matched against title and body.
    pub search: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl From<HealthTopicListParams> for ListHealthTopicsQuery {
    fn from(params: HealthTopicListParams) -> Self {
        Self {
            status: params.status,
            is_major_health_event: params.is_major_health_event,
            search: params.search,
            limit: params.limit,
            offset: params.offset,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthTopicListResponse {
    pub success: bool,
    pub data: Vec<HealthTopicDto>,
    pub pagination: OffsetPaginationDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Listing<HealthTopicDto, OffsetPaginationDto>> for HealthTopicListResponse {
    fn from(listing: Listing<HealthTopicDto, OffsetPaginationDto>) -> Self {
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
pub struct HealthTopicResponse {
    pub success: bool,
    pub data: HealthTopicDto,
}

#[utoipa::path(
    get,
    path = "/health-topics",
    params(HealthTopicListParams),
    responses(
        (status = 200, description = "Health topics with approved article counts", body = HealthTopicListResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "Health Topics"
)]
pub async fn list_health_topics(
    Extension(state): Extension<HttpState>,
    LenientQuery(params): LenientQuery<HealthTopicListParams>,
) -> HttpResult<Json<HealthTopicListResponse>> {
    let listing = state
        .services
        .topic_queries
        .list_health_topics(params.into())
        .await
        .into_http()?;
    Ok(Json(listing.into()))
}

#[utoipa::path(
    get,
    path = "/health-topics/{idOrSlug}",
    params(("idOrSlug" = String, Path, description = "Numeric id or slug")),
    responses(
        (status = 200, description = "Health topic", body = HealthTopicResponse),
        (status = 404, description = "Unknown topic", body = ErrorResponse)
    ),
    tag = "Health Topics"
)]
pub async fn get_health_topic(
    Extension(state): Extension<HttpState>,
    Path(key): Path<String>,
) -> HttpResult<Json<HealthTopicResponse>> {
    let topic = state
        .services
        .topic_queries
        .get_health_topic(GetHealthTopicQuery { key })
        .await
        .into_http()?;
    Ok(Json(HealthTopicResponse {
        success: true,
        data: topic,
    }))
}
