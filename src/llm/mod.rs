// src/llm/mod.rs
// LLM module exports and submodule declarations

pub mod provider;
pub mod router;
pub mod safety;

pub use provider::{ChatMessage, LlmProvider, Role};
pub use router::{ChatRouter, RoutedResponse, RouterError};
pub use safety::{classify, Backend, EscalationReason, RoutingDecision};
