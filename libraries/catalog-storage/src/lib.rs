//! Album Catalog Storage
//!
//! `SQLite` database layer for the album catalog.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `albums` module owns its queries and row mapping
//! - **Explicit Handles**: every query takes the pool it runs on; there is no
//!   process-wide session
//! - **Constraint-Backed**: uniqueness of `name` and `external_id` is enforced
//!   by the schema and surfaced as `CatalogError::Conflict`
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_storage::{create_pool, run_migrations, SqliteAlbumStore};
//! use catalog_core::AlbumStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://albums.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteAlbumStore::new(pool);
//! let albums = store.list_albums().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod albums;

pub use context::SqliteAlbumStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://albums.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// Missing parent directories of a file-backed database are created.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::Connection(format!(
                    "cannot create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created with {} max connections", max_connections);

    Ok(pool)
}

/// Create a pool, apply migrations, and wrap it in a store
pub async fn open(database_url: &str, max_connections: u32) -> Result<SqliteAlbumStore, StorageError> {
    let pool = create_pool(database_url, max_connections).await?;
    run_migrations(&pool).await?;
    Ok(SqliteAlbumStore::new(pool))
}
