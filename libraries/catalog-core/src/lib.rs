//! Album Catalog Core
//!
//! Storage-agnostic types, validation rules, and error handling for the
//! album catalog service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `AlbumSummary`, `NewAlbum`, `AlbumPatch`
//! - **Validation**: turning untrusted JSON payloads into validated types
//! - **Store Trait**: `AlbumStore`, implemented by `catalog-storage`
//! - **Error Handling**: Unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use catalog_core::validation::validate_new_album;
//! use serde_json::json;
//!
//! let body = json!({
//!     "name": "Abbey Road",
//!     "artist": "The Beatles",
//!     "year": 1969,
//!     "external_id": "123456"
//! });
//!
//! let album = validate_new_album(&body, 2024).unwrap();
//! assert_eq!(album.rating, None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use storage::AlbumStore;
pub use types::{Album, AlbumId, AlbumPatch, AlbumSummary, ExternalId, NewAlbum, RatingChange};
