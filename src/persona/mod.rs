// src/persona/mod.rs
// Persona prompts for the Solace assistant. The Support persona answers
// text chat; VoiceSession is the instruction set handed to voice sessions.

pub mod support;
pub mod voice;

pub use support::SUPPORT_PERSONA_PROMPT;
pub use voice::VOICE_PERSONA_PROMPT;

/// The two personas the assistant can speak as. The prompt builder and
/// voice extension each pin one; there is no runtime switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    /// CBT-informed text support assistant
    Support,
    /// Voice therapy session instructions
    VoiceSession,
}

impl Persona {
    /// Returns the base system prompt for this persona.
    pub fn prompt(&self) -> &'static str {
        match self {
            Persona::Support => SUPPORT_PERSONA_PROMPT,
            Persona::VoiceSession => VOICE_PERSONA_PROMPT,
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Persona::Support => "support",
                Persona::VoiceSession => "voice",
            }
        )
    }
}
