// src/voice/openai.rs
// OpenAI-backed speech adapters: Whisper transcription and TTS

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::{SpeechToText, TextToSpeech};

const TTS_URL: &str = "https://api.openai.com/v1/audio/speech";
const STT_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// One client for both speech directions; they share the key and the
/// timeout budget.
pub struct OpenAiSpeech {
    client: Client,
    api_key: String,
    tts_model: String,
    tts_speed: f32,
    stt_model: String,
    stt_language: String,
}

impl OpenAiSpeech {
    pub fn new(
        api_key: String,
        tts_model: String,
        tts_speed: f32,
        stt_model: String,
        stt_language: String,
        timeout: Duration,
    ) -> Result<Self> {
        if api_key.is_empty() {
            return Err(anyhow!("OpenAI API key is required"));
        }

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            tts_model,
            tts_speed,
            stt_model,
            stt_language,
        })
    }
}

#[async_trait]
impl TextToSpeech for OpenAiSpeech {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Bytes> {
        debug!("TTS request: model={}, voice={}, {} chars", self.tts_model, voice, text.len());

        let response = self
            .client
            .post(TTS_URL)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.tts_model,
                "voice": voice,
                "input": text,
                "speed": self.tts_speed,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("TTS API error {}: {}", status, error_text));
        }

        Ok(response.bytes().await?)
    }
}

#[async_trait]
impl SpeechToText for OpenAiSpeech {
    async fn transcribe(&self, audio: Bytes, file_name: &str) -> Result<String> {
        debug!("STT request: model={}, {} bytes", self.stt_model, audio.len());

        let part = Part::bytes(audio.to_vec())
            .file_name(file_name.to_string())
            .mime_str("audio/webm")?;
        let form = Form::new()
            .part("file", part)
            .text("model", self.stt_model.clone())
            .text("language", self.stt_language.clone());

        let response = self
            .client
            .post(STT_URL)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("transcription API error {}: {}", status, error_text));
        }

        let body = response.json::<Value>().await?;
        Ok(body["text"].as_str().unwrap_or_default().to_string())
    }
}
