// src/llm/router.rs
// Routes chat turns between the two hosted backends with single fallback

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::context::UserContext;
use crate::prompt::build_system_prompt;

use super::provider::{ChatMessage, LlmProvider};
use super::safety::{classify, Backend};

#[derive(Debug, Error)]
pub enum RouterError {
    /// Both backends failed for one turn. The message is user-facing
    /// and never carries provider error detail.
    #[error("AI service temporarily unavailable")]
    Unavailable,
}

/// A completed turn and which backend actually produced it, which may
/// differ from the routing decision when fallback fired.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedResponse {
    pub text: String,
    pub backend: &'static str,
}

/// Dispatches each turn to primary or secondary per the safety
/// classification, with exactly one fallback attempt to the other
/// backend. No retries against the same backend, ever.
pub struct ChatRouter {
    primary: Arc<dyn LlmProvider>,
    secondary: Arc<dyn LlmProvider>,
}

impl ChatRouter {
    pub fn new(primary: Arc<dyn LlmProvider>, secondary: Arc<dyn LlmProvider>) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &Arc<dyn LlmProvider> {
        &self.primary
    }

    pub fn secondary(&self) -> &Arc<dyn LlmProvider> {
        &self.secondary
    }

    pub async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        user_context: Option<&UserContext>,
    ) -> Result<RoutedResponse, RouterError> {
        let system = build_system_prompt(user_context);
        self.chat_with_system(messages, system).await
    }

    /// Same routing and fallback, but with a caller-supplied system
    /// prompt. Voice sessions use this to keep their own persona.
    pub async fn chat_with_system(
        &self,
        messages: Vec<ChatMessage>,
        system: String,
    ) -> Result<RoutedResponse, RouterError> {
        let decision = classify(&messages);

        let (selected, alternate) = match decision.backend {
            Backend::Primary => (&self.primary, &self.secondary),
            Backend::Secondary => (&self.secondary, &self.primary),
        };

        info!(
            "routing to {} ({})",
            selected.name(),
            decision.reason.as_str()
        );

        match selected.chat(messages.clone(), system.clone()).await {
            Ok(text) => Ok(RoutedResponse {
                text,
                backend: selected.name(),
            }),
            Err(e) => {
                warn!(
                    "{} failed, falling back to {}: {e:#}",
                    selected.name(),
                    alternate.name()
                );
                match alternate.chat(messages, system).await {
                    Ok(text) => Ok(RoutedResponse {
                        text,
                        backend: alternate.name(),
                    }),
                    Err(e) => {
                        error!("both backends failed, last error from {}: {e:#}", alternate.name());
                        Err(RouterError::Unavailable)
                    }
                }
            }
        }
    }
}
