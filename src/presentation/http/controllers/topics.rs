// src/presentation/http/controllers/topics.rs
use crate::application::{dto::TopicSummaryDto, queries::topics::TopicCatalogQuery};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::LenientQuery;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TopicCatalogParams {
    /// Counts are included unless this is exactly `false`.
    pub include_count: Option<String>,
}

#[utoipa::path(
    get,
    path = "/topics",
    params(TopicCatalogParams),
    responses(
        (status = 200, description = "Every topic, falling back to the bundled catalog when the database is down", body = [TopicSummaryDto]),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "Health Topics"
)]
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
    LenientQuery(params): LenientQuery<TopicCatalogParams>,
) -> HttpResult<Json<Vec<TopicSummaryDto>>> {
    let query = TopicCatalogQuery::from_flag(params.include_count.as_deref());
    state
        .services
        .topic_queries
        .topic_catalog(query)
        .await
        .into_http()
        .map(Json)
}
