mod error;
pub use error::{status_for, user_message};

mod handlers;
mod page;
pub use page::{image_data_url, render_error, render_index, render_result};

mod types;
pub use types::{Base64OcrRequest, ProcessResponse};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use kraken::config::KrakenConfig;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<KrakenConfig>,
}

impl AppState {
    pub fn new(config: KrakenConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn router(config: KrakenConfig) -> Router {
    let body_limit = config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::index))
        .route("/ocr", post(handlers::ocr_form))
        .route("/api/ocr", post(handlers::ocr_api))
        .route("/api/ocr/base64", post(handlers::ocr_base64))
        .route("/ping", get(|| async { "pong" }))
        .route("/health", get(|| async { "healthy" }))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .with_state(AppState::new(config))
}
