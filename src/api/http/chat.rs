// src/api/http/chat.rs

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult, IntoApiError};
use crate::context::{Subject, UserContext};
use crate::llm::provider::ChatMessage;
use crate::state::AppState;

/// POST /api/chat
///
/// The body is validated by hand so malformed requests get the API's
/// JSON error shape instead of an extractor rejection. `userContext`
/// wins when both it and `subject` are present; with only `subject` the
/// payload is assembled server-side.
pub async fn chat_handler(
    State(app_state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let messages: Vec<ChatMessage> = match body.get("messages") {
        Some(value) if value.is_array() => serde_json::from_value(value.clone())
            .map_err(|_| ApiError::bad_request("Invalid request: messages array required"))?,
        _ => return Err(ApiError::bad_request("Invalid request: messages array required")),
    };

    let user_context: Option<UserContext> = match body.get("userContext") {
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|_| ApiError::bad_request("Invalid request: malformed userContext"))?,
        None => match body.get("subject") {
            Some(value) => {
                let subject: Subject = serde_json::from_value(value.clone())
                    .map_err(|_| ApiError::bad_request("Invalid request: malformed subject"))?;
                Some(app_state.assembler.assemble(&subject).await)
            }
            None => None,
        },
    };

    info!(
        "chat request: {} messages, context={}",
        messages.len(),
        user_context.is_some()
    );

    let routed = app_state
        .router
        .chat(messages, user_context.as_ref())
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(json!({
        "response": routed.text,
        "model": routed.backend,
    })))
}

#[derive(Deserialize)]
pub struct SaveChatRequest {
    pub subject: Subject,
    pub messages: Vec<ChatMessage>,
}

/// POST /api/chat/save
pub async fn save_chat_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<SaveChatRequest>,
) -> ApiResult<Json<Value>> {
    app_state
        .store
        .save_conversation(&request.subject, &request.messages)
        .await
        .into_api_error("Failed to save conversation")?;

    Ok(Json(json!({ "saved": true })))
}
