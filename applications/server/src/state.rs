/// Shared application state
use catalog_core::AlbumStore;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// The store handle is passed explicitly to every request; there is no
/// global session.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AlbumStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }
}
