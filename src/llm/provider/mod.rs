// src/llm/provider/mod.rs
// LLM Provider trait and type definitions for the two hosted backends
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod claude;
pub mod gemini;

pub use claude::ClaudeProvider;
pub use gemini::GeminiProvider;

/// Canned supportive line used when a backend responds successfully but
/// without an extractable text block. Success never yields empty text.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "I'm here with you. Could you tell me a little more about what's on your mind?";

/// Only these two roles exist in a conversation; adapters can never
/// send anything else on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Message format shared by both providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Universal LLM provider interface.
///
/// Adapters translate to one hosted model's request/response contract
/// and nothing more: transport and auth errors propagate unmodified,
/// and retry/fallback policy lives entirely in the router.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging and the response `model` field
    fn name(&self) -> &'static str;

    /// Chat completion: returns the first text block of the response,
    /// or `EMPTY_RESPONSE_FALLBACK` when the backend produced none.
    async fn chat(&self, messages: Vec<ChatMessage>, system: String) -> Result<String>;
}
