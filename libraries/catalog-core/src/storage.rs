//! Store trait for the album catalog

use crate::error::Result;
use crate::types::{Album, AlbumId, AlbumPatch, ExternalId, NewAlbum};
use async_trait::async_trait;

/// Persistent album store
///
/// Implementations must make every mutating operation atomic: a failed
/// create, update, or delete leaves the store exactly as it was.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Get all albums in insertion order
    async fn list_albums(&self) -> Result<Vec<Album>>;

    /// Get album by its store-assigned ID
    async fn get_album(&self, id: AlbumId) -> Result<Option<Album>>;

    /// Find the album carrying `external_id`
    ///
    /// More than one match is reported as `CatalogError::Integrity`.
    async fn find_by_external_id(&self, external_id: &ExternalId) -> Result<Option<Album>>;

    /// Persist a new album
    ///
    /// Fails with `CatalogError::Conflict` when `name` or `external_id`
    /// is already taken.
    async fn create_album(&self, album: NewAlbum) -> Result<Album>;

    /// Apply `patch` to the album carrying `external_id`
    async fn update_album(&self, external_id: &ExternalId, patch: AlbumPatch) -> Result<Album>;

    /// Remove the album carrying `external_id`, returning the removed record
    async fn delete_album(&self, external_id: &ExternalId) -> Result<Album>;

    /// Number of stored albums
    async fn count_albums(&self) -> Result<i64>;
}
