//! Album types

use super::{AlbumId, ExternalId};
use serde::{Deserialize, Serialize};

/// A stored album, including the store-assigned `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Album {
    /// Store-assigned surrogate key
    #[cfg_attr(feature = "openapi", schema(value_type = i64, example = 1))]
    pub id: AlbumId,
    /// Album title, unique across the catalog
    #[cfg_attr(feature = "openapi", schema(example = "Abbey Road"))]
    pub name: String,
    /// Performing artist
    #[cfg_attr(feature = "openapi", schema(example = "The Beatles"))]
    pub artist: String,
    /// Release year
    #[cfg_attr(feature = "openapi", schema(example = 1969))]
    pub year: i32,
    /// Score from 0 to 5, absent when unrated
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub rating: Option<i32>,
    /// Free-form review text
    pub review: Option<String>,
    /// Client-chosen identifier, unique across the catalog
    pub external_id: ExternalId,
}

impl Album {
    /// Public representation without the surrogate id
    pub fn summary(&self) -> AlbumSummary {
        AlbumSummary::from(self.clone())
    }
}

/// Album as exposed by the listing and lookup endpoints
///
/// Same fields as [`Album`] minus the surrogate `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AlbumSummary {
    /// Album title
    #[cfg_attr(feature = "openapi", schema(example = "Abbey Road"))]
    pub name: String,
    /// Performing artist
    #[cfg_attr(feature = "openapi", schema(example = "The Beatles"))]
    pub artist: String,
    /// Release year
    #[cfg_attr(feature = "openapi", schema(example = 1969))]
    pub year: i32,
    /// Score from 0 to 5, absent when unrated
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub rating: Option<i32>,
    /// Free-form review text
    pub review: Option<String>,
    /// Client-chosen identifier
    pub external_id: ExternalId,
}

impl From<Album> for AlbumSummary {
    fn from(album: Album) -> Self {
        Self {
            name: album.name,
            artist: album.artist,
            year: album.year,
            rating: album.rating,
            review: album.review,
            external_id: album.external_id,
        }
    }
}

/// Data for creating a new album
///
/// Only constructed through `validation::validate_new_album`, so every
/// instance already satisfies the year and rating bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlbum {
    /// Trimmed, non-empty title
    pub name: String,
    /// Trimmed, non-empty artist
    pub artist: String,
    /// Between `MIN_YEAR` and the current year
    pub year: i32,
    /// Between `MIN_RATING` and `MAX_RATING` when present
    pub rating: Option<i32>,
    /// Free-form review text
    pub review: Option<String>,
    /// Trimmed, non-empty external identifier
    pub external_id: ExternalId,
}

/// Requested change to an album's rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingChange {
    /// Store this rating
    Set(i32),
    /// Remove the stored rating
    Clear,
}

impl RatingChange {
    /// Value to persist in the nullable `rating` column
    pub fn value(self) -> Option<i32> {
        match self {
            Self::Set(rating) => Some(rating),
            Self::Clear => None,
        }
    }
}

/// Partial update of the mutable album fields
///
/// `None` means "not supplied, leave untouched".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumPatch {
    /// New rating, or an instruction to clear it
    pub rating: Option<RatingChange>,
    /// Replacement review text
    pub review: Option<String>,
}

impl AlbumPatch {
    /// True when applying the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.review.is_none()
    }
}
