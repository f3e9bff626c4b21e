// src/presentation/http/controllers/debug.rs
use crate::config::ConnectionSummary;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/debug/db-config",
    responses(
        (status = 200, description = "Database connection settings without the password", body = ConnectionSummary),
        (status = 403, description = "Disabled in production", body = ErrorResponse)
    ),
    tag = "System"
)]
pub async fn db_config(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ConnectionSummary>> {
    if state.production {
        return Err(HttpError::forbidden("Not available in production"));
    }
    Ok(Json(state.database.as_ref().clone()))
}
