// src/llm/safety.rs
// Conversation safety classification for model routing

use super::provider::ChatMessage;

/// The two interchangeable hosted backends. A flat enum keeps the
/// router's fallback a two-branch decision instead of a provider
/// hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Standard/cheaper tier (Gemini)
    Primary,
    /// Higher-capability escalation tier (Claude)
    Secondary,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Primary => write!(f, "primary"),
            Backend::Secondary => write!(f, "secondary"),
        }
    }
}

/// Why a turn was routed where it was. Recomputed per call, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationReason {
    Crisis,
    Trauma,
    DeepHelpRequest,
    LongConversation,
    Standard,
}

impl EscalationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EscalationReason::Crisis => "crisis language",
            EscalationReason::Trauma => "trauma topic",
            EscalationReason::DeepHelpRequest => "deeper help requested",
            EscalationReason::LongConversation => "long conversation",
            EscalationReason::Standard => "standard conversation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingDecision {
    pub backend: Backend,
    pub reason: EscalationReason,
}

/// Crisis terms always escalate, regardless of anything else.
const CRISIS_TERMS: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end my life",
    "want to die",
    "self harm",
    "self-harm",
    "cutting",
    "hurt myself",
    "overdose",
    "end it all",
    "no point living",
];

const TRAUMA_TERMS: &[&str] = &[
    "trauma",
    "ptsd",
    "abuse",
    "assault",
    "rape",
    "molest",
    "domestic violence",
    "flashback",
];

/// Explicit requests for deeper help; checked against the last message
/// only.
const DEEP_HELP_PHRASES: &[&str] = &[
    "i need more help",
    "this is serious",
    "i'm really struggling",
    "deeper conversation",
    "more thorough",
    "i'm in crisis",
];

/// Beyond this many messages the stronger backend handles the longer
/// context.
const LONG_CONVERSATION_THRESHOLD: usize = 10;

/// Classify a conversation for routing. Pure and deterministic: a
/// function of the message list alone, first matching rule wins.
///
/// Matching is case-insensitive substring search, reproducing the
/// shipped heuristic exactly. Known weak: it over-triggers on
/// substrings inside unrelated words and under-triggers on
/// paraphrases, misspellings, and non-English input. Kept as the
/// documented behavior; improving it means changing routing outcomes,
/// not just this function.
pub fn classify(messages: &[ChatMessage]) -> RoutingDecision {
    let last = messages
        .last()
        .map(|m| m.content.to_lowercase())
        .unwrap_or_default();

    let window_start = messages.len().saturating_sub(3);
    let recent = messages[window_start..]
        .iter()
        .map(|m| m.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    if CRISIS_TERMS.iter().any(|term| recent.contains(term)) {
        return RoutingDecision {
            backend: Backend::Secondary,
            reason: EscalationReason::Crisis,
        };
    }

    if TRAUMA_TERMS.iter().any(|term| recent.contains(term)) {
        return RoutingDecision {
            backend: Backend::Secondary,
            reason: EscalationReason::Trauma,
        };
    }

    if DEEP_HELP_PHRASES.iter().any(|phrase| last.contains(phrase)) {
        return RoutingDecision {
            backend: Backend::Secondary,
            reason: EscalationReason::DeepHelpRequest,
        };
    }

    if messages.len() > LONG_CONVERSATION_THRESHOLD {
        return RoutingDecision {
            backend: Backend::Secondary,
            reason: EscalationReason::LongConversation,
        };
    }

    RoutingDecision {
        backend: Backend::Primary,
        reason: EscalationReason::Standard,
    }
}
