//! HTTP service that reduces a TV show listing to the DRM-enabled shows
//! with at least one episode, keeping only what a client needs to render
//! them (image, slug, title).

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod services;

use crate::handlers::{tv_show_handler, AppState};
use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Every method on every path is served by the one listing handler.
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .fallback(tv_show_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .with_state(state)
}
