// src/state.rs
// Shared application state handed to every HTTP handler

use std::sync::Arc;

use crate::context::ContextAssembler;
use crate::llm::ChatRouter;
use crate::store::WellnessStore;
use crate::voice::{SpeechToText, TextToSpeech};

pub struct AppState {
    pub router: Arc<ChatRouter>,
    pub assembler: ContextAssembler,
    pub store: Arc<WellnessStore>,
    pub transcriber: Arc<dyn SpeechToText>,
    pub synthesizer: Arc<dyn TextToSpeech>,
}

impl AppState {
    pub fn new(
        router: Arc<ChatRouter>,
        store: Arc<WellnessStore>,
        transcriber: Arc<dyn SpeechToText>,
        synthesizer: Arc<dyn TextToSpeech>,
    ) -> Self {
        Self {
            router,
            assembler: ContextAssembler::new(store.clone()),
            store,
            transcriber,
            synthesizer,
        }
    }
}
