use catalog_core::{error::Result, types::*, CatalogError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const ALBUM_COLUMNS: &str = "id, name, artist, year, rating, review, external_id";

fn album_from_row(row: &SqliteRow) -> Album {
    Album {
        id: row.get("id"),
        name: row.get("name"),
        artist: row.get("artist"),
        year: row.get("year"),
        rating: row.get("rating"),
        review: row.get("review"),
        external_id: ExternalId::new(row.get::<String, _>("external_id")),
    }
}

/// Map a failed write to `Conflict` when a unique column was hit
fn map_write_error(err: sqlx::Error) -> CatalogError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            // SQLite reports "UNIQUE constraint failed: albums.<column>"
            let field = if db_err.message().contains("albums.external_id") {
                "external_id"
            } else {
                "name"
            };
            return CatalogError::conflict(field);
        }
    }
    err.into()
}

/// Get all albums in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Album>> {
    let rows = sqlx::query(&format!("SELECT {ALBUM_COLUMNS} FROM albums ORDER BY id"))
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(album_from_row).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: AlbumId) -> Result<Option<Album>> {
    let row = sqlx::query(&format!("SELECT {ALBUM_COLUMNS} FROM albums WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(album_from_row))
}

/// Find the album with the given external id
///
/// The column is unique, so a second row means the schema was bypassed.
pub async fn find_by_external_id(
    pool: &SqlitePool,
    external_id: &ExternalId,
) -> Result<Option<Album>> {
    let rows = sqlx::query(&format!(
        "SELECT {ALBUM_COLUMNS} FROM albums WHERE external_id = ? ORDER BY id LIMIT 2"
    ))
    .bind(external_id.as_str())
    .fetch_all(pool)
    .await?;

    match rows.as_slice() {
        [] => Ok(None),
        [row] => Ok(Some(album_from_row(row))),
        _ => Err(CatalogError::integrity(format!(
            "multiple albums share external_id {}",
            external_id
        ))),
    }
}

/// Create new album
///
/// Writes in this module are single statements: SQLite takes the write lock
/// when the statement starts, so contending writers wait on `busy_timeout`.
pub async fn create(pool: &SqlitePool, album: NewAlbum) -> Result<Album> {
    let row = sqlx::query(&format!(
        r#"
        INSERT INTO albums (name, artist, year, rating, review, external_id)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING {ALBUM_COLUMNS}
        "#
    ))
    .bind(&album.name)
    .bind(&album.artist)
    .bind(album.year)
    .bind(album.rating)
    .bind(&album.review)
    .bind(album.external_id.as_str())
    .fetch_one(pool)
    .await
    .map_err(map_write_error)?;

    Ok(album_from_row(&row))
}

/// Apply a partial update to the album with the given external id
///
/// Absent fields keep their stored value; `RatingChange::Clear` nulls the rating.
pub async fn update(pool: &SqlitePool, external_id: &ExternalId, patch: AlbumPatch) -> Result<Album> {
    let row = sqlx::query(&format!(
        r#"
        UPDATE albums
        SET rating = CASE WHEN ? THEN ? ELSE rating END,
            review = COALESCE(?, review),
            updated_at = datetime('now')
        WHERE external_id = ?
        RETURNING {ALBUM_COLUMNS}
        "#
    ))
    .bind(patch.rating.is_some())
    .bind(patch.rating.and_then(RatingChange::value))
    .bind(&patch.review)
    .bind(external_id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref()
        .map(album_from_row)
        .ok_or_else(|| CatalogError::not_found("Album", external_id.as_str()))
}

/// Delete the album with the given external id, returning what was removed
pub async fn delete(pool: &SqlitePool, external_id: &ExternalId) -> Result<Album> {
    let row = sqlx::query(&format!(
        "DELETE FROM albums WHERE external_id = ? RETURNING {ALBUM_COLUMNS}"
    ))
    .bind(external_id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref()
        .map(album_from_row)
        .ok_or_else(|| CatalogError::not_found("Album", external_id.as_str()))
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM albums")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
