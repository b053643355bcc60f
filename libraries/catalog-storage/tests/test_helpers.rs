//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so constraints and migrations behave exactly as in production.

#![allow(dead_code)]

use catalog_core::types::{ExternalId, NewAlbum};
use catalog_storage::SqliteAlbumStore;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub store: SqliteAlbumStore,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = catalog_storage::create_pool(&db_url, 5)
            .await
            .expect("Failed to create pool");

        catalog_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            store: SqliteAlbumStore::new(pool),
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        self.store.pool()
    }
}

/// Test fixture: a valid album payload
pub fn new_album(name: &str, external_id: &str) -> NewAlbum {
    NewAlbum {
        name: name.to_string(),
        artist: "The Beatles".to_string(),
        year: 1969,
        rating: Some(5),
        review: Some("Great".to_string()),
        external_id: ExternalId::new(external_id),
    }
}
