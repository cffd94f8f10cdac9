// src/voice/mod.rs
// Speech traits, voice session state machine, and the OpenAI adapter

mod openai;
mod session;

pub use openai::OpenAiSpeech;
pub use session::{VoiceSession, VoiceState};

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Turns captured audio into text.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    async fn transcribe(&self, audio: Bytes, file_name: &str) -> Result<String>;
}

/// Turns response text into playable audio.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Bytes>;
}

/// Voice session failures. Messages are calm and user-facing; they are
/// what a session participant would see or hear.
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("Microphone access was not granted. You can try again whenever you're ready.")]
    CaptureDenied,

    #[error("I couldn't quite catch that. Could you try saying it again?")]
    Transcription,

    #[error("I'm having trouble responding right now. Let's try that once more.")]
    Response,

    #[error("I couldn't prepare the audio for that reply, but the text is saved.")]
    Synthesis,

    #[error("The session is still busy. Please wait a moment before closing.")]
    SessionBusy,

    #[error("That action isn't available right now.")]
    WrongState,
}
