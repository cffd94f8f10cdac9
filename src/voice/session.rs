// src/voice/session.rs
// Voice session lifecycle: Idle -> Listening -> Processing -> Speaking

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use crate::llm::provider::ChatMessage;
use crate::llm::ChatRouter;
use crate::persona::Persona;

use super::{SpeechToText, TextToSpeech, VoiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Idle,
    Listening,
    Processing,
    Speaking,
}

/// One voice therapy session. Drives the capture/transcribe/respond/
/// synthesize cycle and owns the conversation transcript; every error
/// lands the session back in `Idle` so the next turn can start clean.
pub struct VoiceSession {
    router: Arc<ChatRouter>,
    transcriber: Arc<dyn SpeechToText>,
    synthesizer: Arc<dyn TextToSpeech>,
    voice: String,
    state: VoiceState,
    messages: Vec<ChatMessage>,
}

impl VoiceSession {
    pub fn new(
        router: Arc<ChatRouter>,
        transcriber: Arc<dyn SpeechToText>,
        synthesizer: Arc<dyn TextToSpeech>,
        voice: String,
    ) -> Self {
        Self {
            router,
            transcriber,
            synthesizer,
            voice,
            state: VoiceState::Idle,
            messages: Vec::new(),
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Begin a capture turn.
    pub fn start_listening(&mut self) -> Result<(), VoiceError> {
        if self.state != VoiceState::Idle {
            return Err(VoiceError::WrongState);
        }
        self.state = VoiceState::Listening;
        Ok(())
    }

    /// Capture could not proceed (microphone permission refused or the
    /// recorder failed). Returns to `Idle` and reports the denial.
    pub fn abort_capture(&mut self) -> Result<(), VoiceError> {
        if self.state != VoiceState::Listening {
            return Err(VoiceError::WrongState);
        }
        self.state = VoiceState::Idle;
        Err(VoiceError::CaptureDenied)
    }

    /// Finish a capture turn: transcribe, append the transcript, and
    /// get a routed response. An empty or failed transcription ends the
    /// turn without ever reaching a backend.
    pub async fn process_capture(
        &mut self,
        audio: Bytes,
        file_name: &str,
    ) -> Result<String, VoiceError> {
        if self.state != VoiceState::Listening {
            return Err(VoiceError::WrongState);
        }
        self.state = VoiceState::Processing;

        let transcript = match self.transcriber.transcribe(audio, file_name).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                self.state = VoiceState::Idle;
                return Err(VoiceError::Transcription);
            }
            Err(e) => {
                warn!("transcription failed: {e:#}");
                self.state = VoiceState::Idle;
                return Err(VoiceError::Transcription);
            }
        };

        info!("transcribed {} chars", transcript.len());
        self.messages.push(ChatMessage::user(transcript));

        let response = match self
            .router
            .chat_with_system(
                self.messages.clone(),
                Persona::VoiceSession.prompt().to_string(),
            )
            .await
        {
            Ok(routed) => routed,
            Err(e) => {
                warn!("voice response failed: {e}");
                self.state = VoiceState::Idle;
                return Err(VoiceError::Response);
            }
        };

        self.messages.push(ChatMessage::assistant(&response.text));
        self.state = VoiceState::Speaking;
        Ok(response.text)
    }

    /// Synthesize the pending assistant reply. On failure the session
    /// returns to `Idle` but the reply text stays in the transcript.
    pub async fn speak(&mut self) -> Result<Bytes, VoiceError> {
        if self.state != VoiceState::Speaking {
            return Err(VoiceError::WrongState);
        }

        let text = self
            .messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();

        match self.synthesizer.synthesize(&text, &self.voice).await {
            Ok(audio) => Ok(audio),
            Err(e) => {
                warn!("synthesis failed, keeping text response: {e:#}");
                self.state = VoiceState::Idle;
                Err(VoiceError::Synthesis)
            }
        }
    }

    /// Playback finished; the session is ready for the next turn.
    pub fn finish_playback(&mut self) -> Result<(), VoiceError> {
        if self.state != VoiceState::Speaking {
            return Err(VoiceError::WrongState);
        }
        self.state = VoiceState::Idle;
        Ok(())
    }

    /// End the session and take the transcript. Only permitted between
    /// turns; a busy session stays open.
    pub fn close(&mut self) -> Result<Vec<ChatMessage>, VoiceError> {
        if self.state != VoiceState::Idle {
            return Err(VoiceError::SessionBusy);
        }
        Ok(std::mem::take(&mut self.messages))
    }
}
