/// `OpenAPI` description of the HTTP API
use crate::{
    api::{albums, health},
    error::ErrorResponse,
};
use axum::Json;
use catalog_core::types::{Album, AlbumSummary, ExternalId};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Album Catalog API", description = "Register, look up, rate and remove music albums"),
    paths(
        albums::list_albums,
        albums::get_album,
        albums::find_album,
        albums::create_album,
        albums::update_album,
        albums::delete_album,
        health::health
    ),
    components(schemas(
        Album,
        AlbumSummary,
        ExternalId,
        albums::CreateAlbumRequest,
        albums::UpdateAlbumRequest,
        albums::MessageResponse,
        health::HealthResponse,
        ErrorResponse
    )),
    tags(
        (name = "albums", description = "Album catalog operations"),
        (name = "health", description = "Service status")
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
