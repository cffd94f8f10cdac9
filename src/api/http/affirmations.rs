// src/api/http/affirmations.rs

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use crate::llm::provider::ChatMessage;
use crate::prompt::{
    build_affirmation_prompt, strip_wrapping_quotes, AffirmationSignals, DEFAULT_AFFIRMATION,
};
use crate::state::AppState;

/// POST /api/affirmations/generate
///
/// Always 200. A failed or unparseable generation serves the default
/// affirmation; the user-facing text never depends on backend health.
pub async fn generate_affirmation_handler(
    State(app_state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> Json<Value> {
    let signals: AffirmationSignals = body
        .and_then(|Json(value)| serde_json::from_value(value).ok())
        .unwrap_or_default();

    let prompt = build_affirmation_prompt(&signals);

    let affirmation = match app_state
        .router
        .secondary()
        .chat(vec![ChatMessage::user(prompt)], String::new())
        .await
    {
        Ok(text) if !text.trim().is_empty() => strip_wrapping_quotes(&text).to_string(),
        Ok(_) => DEFAULT_AFFIRMATION.to_string(),
        Err(e) => {
            warn!("affirmation generation failed, serving default: {e:#}");
            DEFAULT_AFFIRMATION.to_string()
        }
    };

    Json(json!({ "affirmation": affirmation }))
}
