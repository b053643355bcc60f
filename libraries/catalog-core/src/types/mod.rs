//! Domain types shared by the store and the HTTP layer

mod album;
mod ids;

pub use album::{Album, AlbumPatch, AlbumSummary, NewAlbum, RatingChange};
pub use ids::{AlbumId, ExternalId};
