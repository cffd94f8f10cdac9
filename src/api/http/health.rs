// src/api/http/health.rs

use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
