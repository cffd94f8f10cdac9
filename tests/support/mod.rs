// tests/support/mod.rs
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use bytes::Bytes;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use solace::llm::provider::{ChatMessage, LlmProvider};
use solace::llm::ChatRouter;
use solace::state::AppState;
use solace::store::WellnessStore;
use solace::voice::{SpeechToText, TextToSpeech};

/// Scripted provider double. Counts calls so tests can assert exactly
/// how many backend attempts a path made.
pub struct MockProvider {
    name: &'static str,
    reply: Option<String>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn ok(name: &'static str, reply: &str) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn chat(&self, _messages: Vec<ChatMessage>, _system: String) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(anyhow!("connection refused")),
        }
    }
}

pub struct StubTranscriber {
    transcript: Option<String>,
    calls: AtomicUsize,
}

impl StubTranscriber {
    pub fn ok(transcript: &str) -> Arc<Self> {
        Arc::new(Self {
            transcript: Some(transcript.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            transcript: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechToText for StubTranscriber {
    async fn transcribe(&self, _audio: Bytes, _file_name: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.transcript {
            Some(text) => Ok(text.clone()),
            None => Err(anyhow!("transcription service down")),
        }
    }
}

pub struct StubSynthesizer {
    audio: Option<Vec<u8>>,
}

impl StubSynthesizer {
    pub fn ok(audio: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            audio: Some(audio.to_vec()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { audio: None })
    }
}

#[async_trait]
impl TextToSpeech for StubSynthesizer {
    async fn synthesize(&self, _text: &str, _voice: &str) -> anyhow::Result<Bytes> {
        match &self.audio {
            Some(bytes) => Ok(Bytes::from(bytes.clone())),
            None => Err(anyhow!("synthesis service down")),
        }
    }
}

/// In-memory SQLite with a single connection so every query sees the
/// same database.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("create in-memory sqlite")
}

pub async fn test_store() -> (Arc<WellnessStore>, SqlitePool) {
    let pool = memory_pool().await;
    let store = Arc::new(WellnessStore::new(pool.clone()));
    store.init_schema().await.expect("init schema");
    (store, pool)
}

pub fn test_router(
    primary: Arc<MockProvider>,
    secondary: Arc<MockProvider>,
) -> Arc<ChatRouter> {
    Arc::new(ChatRouter::new(primary, secondary))
}

/// Full AppState with mock providers, stub speech services, and a fresh
/// in-memory store. Returns the pool for seeding.
pub async fn test_state(
    primary: Arc<MockProvider>,
    secondary: Arc<MockProvider>,
    transcriber: Arc<StubTranscriber>,
    synthesizer: Arc<StubSynthesizer>,
) -> (Arc<AppState>, SqlitePool) {
    let (store, pool) = test_store().await;
    let state = Arc::new(AppState::new(
        test_router(primary, secondary),
        store,
        transcriber,
        synthesizer,
    ));
    (state, pool)
}
