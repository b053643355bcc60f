//! Album Catalog Server Library
//!
//! HTTP/JSON API for managing a catalog of music albums.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        .route("/openapi.json", get(api::openapi::openapi_json))
        // Albums
        .route("/albums", get(api::albums::list_albums))
        .route("/albums/:id", get(api::albums::get_album))
        .route(
            "/album",
            get(api::albums::find_album).post(api::albums::create_album),
        )
        .route(
            "/album/:external_id",
            put(api::albums::update_album).delete(api::albums::delete_album),
        )
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
