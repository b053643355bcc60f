/// Common test utilities and fixtures
use anyhow::Result;
use catalog_storage::SqliteAlbumStore;
use std::sync::Arc;
use tempfile::TempDir;

/// Create a file-backed test store with migrations applied
///
/// The returned `TempDir` must outlive the store.
pub async fn create_test_store() -> Result<(Arc<SqliteAlbumStore>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_url = format!("sqlite://{}", temp_dir.path().join("albums.db").display());
    let store = catalog_storage::open(&db_url, 5).await?;
    Ok((Arc::new(store), temp_dir))
}

/// Album payloads used across tests
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn abbey_road() -> Value {
        json!({
            "name": "Abbey Road",
            "artist": "The Beatles",
            "year": 1969,
            "rating": 5,
            "review": "Great",
            "external_id": "123456"
        })
    }

    pub fn revolver() -> Value {
        json!({
            "name": "Revolver",
            "artist": "The Beatles",
            "year": 1966,
            "external_id": "654321"
        })
    }
}
