// src/llm/provider/claude.rs
// Claude Messages API provider implementation

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::{ChatMessage, LlmProvider, EMPTY_RESPONSE_FALLBACK};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

pub struct ClaudeProvider {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: usize,
}

impl ClaudeProvider {
    pub fn new(
        api_key: String,
        model: String,
        max_tokens: usize,
        timeout: Duration,
    ) -> Result<Self> {
        if api_key.is_empty() {
            return Err(anyhow!("Anthropic API key is required"));
        }

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            model,
            max_tokens,
        })
    }
}

#[async_trait]
impl LlmProvider for ClaudeProvider {
    fn name(&self) -> &'static str {
        "claude"
    }

    async fn chat(&self, messages: Vec<ChatMessage>, system: String) -> Result<String> {
        let api_messages: Vec<Value> = messages
            .iter()
            .map(|msg| {
                json!({
                    "role": msg.role,
                    "content": msg.content,
                })
            })
            .collect();

        let mut body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": api_messages,
        });
        if !system.is_empty() {
            body["system"] = json!(system);
        }

        debug!("Claude request: model={}, {} messages", self.model, messages.len());

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("Claude API error {}: {}", status, error_text));
        }

        let raw_response = response.json::<Value>().await?;

        // First text-typed content block; anything else (tool use,
        // thinking) is not part of this contract.
        let text = raw_response["content"]
            .as_array()
            .and_then(|blocks| {
                blocks.iter().find_map(|block| {
                    (block["type"] == "text")
                        .then(|| block["text"].as_str())
                        .flatten()
                })
            })
            .unwrap_or_default();

        if text.is_empty() {
            warn!("Claude response had no text block, using supportive fallback");
            return Ok(EMPTY_RESPONSE_FALLBACK.to_string());
        }

        Ok(text.to_string())
    }
}
