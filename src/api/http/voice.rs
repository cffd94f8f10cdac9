// src/api/http/voice.rs
// Single voice endpoint branching on content type: JSON for synthesis,
// multipart for transcription.

use axum::{
    body::Body,
    extract::{FromRequest, Multipart, Request, State},
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult, IntoApiError};
use crate::config::CONFIG;
use crate::state::AppState;

#[derive(Deserialize)]
struct SpeakRequest {
    text: String,
    voice: Option<String>,
}

/// POST /api/voice
pub async fn voice_handler(
    State(app_state): State<Arc<AppState>>,
    request: Request,
) -> ApiResult<Response> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if content_type.starts_with("application/json") {
        let Json(speak): Json<SpeakRequest> = Json::from_request(request, &())
            .await
            .map_err(|_| ApiError::bad_request("Invalid request body"))?;

        if speak.text.is_empty() {
            return Err(ApiError::bad_request("Text is required"));
        }

        let voice = speak.voice.unwrap_or_else(|| CONFIG.tts_voice.clone());
        info!("TTS request: {} chars, voice={}", speak.text.len(), voice);

        let audio = app_state
            .synthesizer
            .synthesize(&speak.text, &voice)
            .await
            .into_api_error("Failed to generate voice response")?;

        return Response::builder()
            .header(CONTENT_TYPE, "audio/mpeg")
            .header(CONTENT_LENGTH, audio.len())
            .body(Body::from(audio))
            .into_api_error("Failed to build audio response");
    }

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|_| ApiError::bad_request("Invalid multipart body"))?;

        let mut audio = None;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|_| ApiError::bad_request("Invalid multipart body"))?
        {
            if field.name() == Some("audio") {
                let file_name = field.file_name().unwrap_or("audio.webm").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::bad_request("Invalid multipart body"))?;
                audio = Some((data, file_name));
                break;
            }
        }

        let Some((data, file_name)) = audio else {
            return Err(ApiError::bad_request("Audio file is required"));
        };

        info!("STT request: {} bytes ({})", data.len(), file_name);

        let transcription = app_state
            .transcriber
            .transcribe(data, &file_name)
            .await
            .into_api_error("Failed to transcribe audio")?;

        return Ok(Json(json!({ "transcription": transcription })).into_response());
    }

    Err(ApiError::bad_request("Invalid content type"))
}
