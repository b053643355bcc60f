/// Albums API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog_core::{
    types::{Album, AlbumId, AlbumSummary, ExternalId},
    validation,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub external_id: Option<String>,
}

/// Confirmation returned by the mutating endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Album added successfully")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Body accepted by `POST /album`
///
/// Handlers validate the raw JSON; this type only describes it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAlbumRequest {
    #[schema(example = "Abbey Road")]
    pub name: String,
    #[schema(example = "The Beatles")]
    pub artist: String,
    /// Between 1800 and the current year
    #[schema(example = 1969)]
    pub year: i32,
    /// Between 0 and 5
    #[schema(example = 5)]
    pub rating: Option<i32>,
    #[schema(example = "Great")]
    pub review: Option<String>,
    /// Unique; numeric ids are stored as text
    #[schema(example = "123456")]
    pub external_id: String,
}

/// Body accepted by `PUT /album/{external_id}`
///
/// At least one key is required. `rating` may also be numeric text, and
/// `null` clears it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAlbumRequest {
    #[schema(example = 4)]
    pub rating: Option<i32>,
    #[schema(example = "Still great")]
    pub review: Option<String>,
}

/// Unwrap a JSON body, letting validation decide what an absent body means
fn json_body(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Null),
        Err(rejection) => Err(ServerError::BadRequest(format!(
            "Invalid JSON body: {}",
            rejection.body_text()
        ))),
    }
}

/// GET /albums
/// List every album
#[utoipa::path(
    get,
    path = "/albums",
    tag = "albums",
    operation_id = "list_albums",
    responses(
        (status = 200, description = "Every album in insertion order", body = [AlbumSummary]),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_albums(State(app_state): State<AppState>) -> Result<Json<Vec<AlbumSummary>>> {
    let albums = app_state.store.list_albums().await?;
    Ok(Json(albums.into_iter().map(AlbumSummary::from).collect()))
}

/// GET /albums/:id
/// Full record, including the store-assigned id
#[utoipa::path(
    get,
    path = "/albums/{id}",
    tag = "albums",
    operation_id = "get_album",
    params(("id" = i64, Path, description = "Store-assigned album id")),
    responses(
        (status = 200, description = "The album", body = Album),
        (status = 404, description = "No album with this id", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_album(
    Path(id): Path<AlbumId>,
    State(app_state): State<AppState>,
) -> Result<Json<Album>> {
    let album = app_state
        .store
        .get_album(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Album not found".to_string()))?;
    Ok(Json(album))
}

/// GET /album?external_id=X
/// Lookup by external id; the array holds zero or one album
#[utoipa::path(
    get,
    path = "/album",
    tag = "albums",
    operation_id = "find_album",
    params(("external_id" = String, Query, description = "External id to look up")),
    responses(
        (status = 200, description = "Matching albums, empty when none", body = [AlbumSummary]),
        (status = 400, description = "Missing external_id parameter", body = crate::error::ErrorResponse)
    )
)]
pub async fn find_album(
    State(app_state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<Vec<AlbumSummary>>> {
    let external_id = query
        .external_id
        .filter(|id| !id.trim().is_empty())
        .map(ExternalId::new)
        .ok_or_else(|| {
            ServerError::BadRequest("Provide the external_id query parameter".to_string())
        })?;

    let album = app_state.store.find_by_external_id(&external_id).await?;
    Ok(Json(album.into_iter().map(AlbumSummary::from).collect()))
}

/// POST /album
/// Register a new album
#[utoipa::path(
    post,
    path = "/album",
    tag = "albums",
    operation_id = "create_album",
    request_body = CreateAlbumRequest,
    responses(
        (status = 201, description = "Album created", body = MessageResponse),
        (status = 400, description = "Missing or invalid field", body = crate::error::ErrorResponse),
        (status = 409, description = "Name or external_id already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_album(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let body = json_body(payload)?;
    let new_album = validation::validate_new_album(&body, validation::current_year())?;

    let album = app_state.store.create_album(new_album).await?;
    tracing::info!(id = album.id, external_id = %album.external_id, "Album created");

    Ok((
        StatusCode::CREATED,
        MessageResponse::new("Album added successfully"),
    ))
}

/// PUT /album/:external_id
/// Update rating and/or review
#[utoipa::path(
    put,
    path = "/album/{external_id}",
    tag = "albums",
    operation_id = "update_album",
    params(("external_id" = String, Path, description = "External id of the album")),
    request_body = UpdateAlbumRequest,
    responses(
        (status = 200, description = "Album updated", body = MessageResponse),
        (status = 400, description = "Empty body or invalid field", body = crate::error::ErrorResponse),
        (status = 404, description = "No album with this external id", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_album(
    Path(external_id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let body = json_body(payload)?;
    let patch = validation::validate_album_patch(&body)?;

    let external_id = ExternalId::new(external_id);
    let album = app_state.store.update_album(&external_id, patch).await?;
    tracing::info!(external_id = %external_id, "Album updated");

    Ok(MessageResponse::new(format!(
        "Album {} updated successfully",
        album.name
    )))
}

/// DELETE /album/:external_id
/// Remove an album
#[utoipa::path(
    delete,
    path = "/album/{external_id}",
    tag = "albums",
    operation_id = "delete_album",
    params(("external_id" = String, Path, description = "External id of the album")),
    responses(
        (status = 200, description = "Album removed", body = MessageResponse),
        (status = 404, description = "No album with this external id", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_album(
    Path(external_id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let external_id = ExternalId::new(external_id);
    let album = app_state.store.delete_album(&external_id).await?;
    tracing::info!(external_id = %external_id, "Album deleted");

    Ok(MessageResponse::new(format!(
        "{} was removed successfully",
        album.name
    )))
}
