/// Health check API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub albums: i64,
}

/// GET /health - Health check endpoint
///
/// Counts albums so a broken database shows up as a 500.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    operation_id = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = crate::error::ErrorResponse)
    )
)]
pub async fn health(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    let albums = app_state.store.count_albums().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        albums,
    }))
}
