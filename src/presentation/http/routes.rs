// src/presentation/http/routes.rs
use crate::config::RateLimitSettings;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, debug, health_topics, topics},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{Extension, Router, http::Method, routing::get};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// Read endpoints, mounted both at the root and under `/api`.
fn api_routes() -> Router {
    Router::new()
        .route("/articles", get(articles::list_articles))
        .route("/articles/{idOrSlug}", get(articles::get_article))
        .route("/health-topics", get(health_topics::list_health_topics))
        .route(
            "/health-topics/{idOrSlug}",
            get(health_topics::get_health_topic),
        )
        .route("/topics", get(topics::list_topics))
}

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api_routes())
        .nest(
            "/api",
            api_routes().route("/debug/db-config", get(debug::db_config)),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// `build_router` plus per-IP rate limiting when `rate_limit` is set.
pub fn build_router_with_rate_limit(
    state: HttpState,
    rate_limit: Option<RateLimitSettings>,
) -> Router {
    let router = build_router(state);
    match rate_limit.and_then(rate_limit_layer) {
        Some(layer) => router.layer(layer),
        None => router,
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
