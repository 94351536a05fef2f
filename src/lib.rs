pub mod api;
pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod views;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state for every request
#[derive(Clone)]
pub struct AppState {
    pub api: api::ApiClient,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, reqwest::Error> {
        let api = api::ApiClient::from_config(&config.api)?;
        Ok(Arc::new(Self { api, config }))
    }
}

/// The whole site: pages, health check and the not-found fallback.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .fallback(controllers::pages::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
