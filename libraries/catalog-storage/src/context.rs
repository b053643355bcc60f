use crate::albums;
use async_trait::async_trait;
use catalog_core::{error::Result, storage::AlbumStore, types::*};
use sqlx::SqlitePool;

/// Album store backed by a `SQLite` pool
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct SqliteAlbumStore {
    pool: SqlitePool,
}

impl SqliteAlbumStore {
    /// Wrap a pool that already has migrations applied
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AlbumStore for SqliteAlbumStore {
    async fn list_albums(&self) -> Result<Vec<Album>> {
        albums::get_all(&self.pool).await
    }

    async fn get_album(&self, id: AlbumId) -> Result<Option<Album>> {
        albums::get_by_id(&self.pool, id).await
    }

    async fn find_by_external_id(&self, external_id: &ExternalId) -> Result<Option<Album>> {
        albums::find_by_external_id(&self.pool, external_id).await
    }

    async fn create_album(&self, album: NewAlbum) -> Result<Album> {
        albums::create(&self.pool, album).await
    }

    async fn update_album(&self, external_id: &ExternalId, patch: AlbumPatch) -> Result<Album> {
        albums::update(&self.pool, external_id, patch).await
    }

    async fn delete_album(&self, external_id: &ExternalId) -> Result<Album> {
        albums::delete(&self.pool, external_id).await
    }

    async fn count_albums(&self) -> Result<i64> {
        albums::count(&self.pool).await
    }
}
