// src/api/http/mod.rs
// HTTP router composition for the REST API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::state::AppState;

mod affirmations;
mod chat;
mod health;
mod voice;

pub use affirmations::generate_affirmation_handler;
pub use chat::{chat_handler, save_chat_handler};
pub use health::health_handler;
pub use voice::voice_handler;

pub fn http_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/chat/save", post(save_chat_handler))
        .route("/api/voice", post(voice_handler))
        .route("/api/affirmations/generate", post(generate_affirmation_handler))
}
