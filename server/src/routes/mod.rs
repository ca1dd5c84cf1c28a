//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the hosting page, the chat endpoint, and the push
//! channel websocket under a single Axum router. The compiled widget
//! (`wasm-bindgen` output) is served as static files under `/pkg`.

pub mod channel;
pub mod chat;
pub mod identity;
pub mod index;


use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(index::index))
        .route("/chat", post(chat::post_chat))
        .route("/channel", get(channel::handle_channel))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
