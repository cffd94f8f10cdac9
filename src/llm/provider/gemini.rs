// src/llm/provider/gemini.rs
// Gemini provider using the Google AI generateContent API

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::{ChatMessage, LlmProvider, Role, EMPTY_RESPONSE_FALLBACK};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: usize,
}

impl GeminiProvider {
    pub fn new(
        api_key: String,
        model: String,
        max_tokens: usize,
        timeout: Duration,
    ) -> Result<Self> {
        if api_key.is_empty() {
            return Err(anyhow!("Google API key is required"));
        }

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            model,
            max_tokens,
        })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            BASE_URL, self.model, self.api_key
        )
    }

    /// Convert messages to Gemini `contents`. Gemini has no system
    /// channel here, so the instruction rides in front of the first
    /// user message the same way the conversation would read it.
    fn to_contents(messages: &[ChatMessage], system: &str) -> Vec<Value> {
        let mut contents = Vec::new();
        let mut system_pending = !system.is_empty();

        for msg in messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "model",
            };

            let text = if role == "user" && system_pending {
                system_pending = false;
                format!("[System]\n{}\n\n[User]\n{}", system, msg.content)
            } else {
                msg.content.clone()
            };

            contents.push(json!({
                "role": role,
                "parts": [{"text": text}],
            }));
        }

        contents
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn chat(&self, messages: Vec<ChatMessage>, system: String) -> Result<String> {
        let request_body = json!({
            "contents": Self::to_contents(&messages, &system),
            "generationConfig": {
                "maxOutputTokens": self.max_tokens,
                "temperature": 0.7,
            },
        });

        debug!("Gemini request: model={}, {} messages", self.model, messages.len());

        let response = self
            .client
            .post(self.api_url())
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("Gemini API error {}: {}", status, error_text));
        }

        let raw_response = response.json::<Value>().await?;

        let text = raw_response["candidates"][0]["content"]["parts"]
            .as_array()
            .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
            .unwrap_or_default();

        if text.is_empty() {
            warn!("Gemini response had no text part, using supportive fallback");
            return Ok(EMPTY_RESPONSE_FALLBACK.to_string());
        }

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_rides_first_user_message() {
        let messages = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi"),
            ChatMessage::user("how are you"),
        ];
        let contents = GeminiProvider::to_contents(&messages, "be kind");

        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        let first = contents[0]["parts"][0]["text"].as_str().unwrap();
        assert!(first.starts_with("[System]\nbe kind"));
        assert!(first.ends_with("hello"));
        // only the first user message carries it
        assert_eq!(contents[2]["parts"][0]["text"], "how are you");
        assert_eq!(contents[1]["role"], "model");
    }

    #[test]
    fn test_no_system_leaves_messages_untouched() {
        let messages = vec![ChatMessage::user("hello")];
        let contents = GeminiProvider::to_contents(&messages, "");
        assert_eq!(contents[0]["parts"][0]["text"], "hello");
    }
}
