// src/main.rs

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use solace::api::http::http_router;
use solace::config::CONFIG;
use solace::llm::provider::{ClaudeProvider, GeminiProvider};
use solace::llm::ChatRouter;
use solace::state::AppState;
use solace::store::WellnessStore;
use solace::voice::OpenAiSpeech;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(CONFIG.log_level.parse().unwrap_or(tracing::Level::INFO))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Solace backend");
    info!("Primary model: {}", CONFIG.gemini_model);
    info!("Secondary model: {}", CONFIG.claude_model);

    let pool = SqlitePoolOptions::new()
        .max_connections(CONFIG.sqlite_max_connections)
        .connect(&CONFIG.database_url)
        .await?;

    let store = Arc::new(WellnessStore::new(pool));
    store.init_schema().await?;

    let primary = Arc::new(GeminiProvider::new(
        CONFIG.google_api_key.clone(),
        CONFIG.gemini_model.clone(),
        CONFIG.gemini_max_tokens,
        CONFIG.model_timeout(),
    )?);
    let secondary = Arc::new(ClaudeProvider::new(
        CONFIG.anthropic_api_key.clone(),
        CONFIG.claude_model.clone(),
        CONFIG.claude_max_tokens,
        CONFIG.model_timeout(),
    )?);
    let router = Arc::new(ChatRouter::new(primary, secondary));

    let speech = Arc::new(OpenAiSpeech::new(
        CONFIG.openai_api_key.clone(),
        CONFIG.tts_model.clone(),
        CONFIG.tts_speed,
        CONFIG.stt_model.clone(),
        CONFIG.stt_language.clone(),
        CONFIG.speech_timeout(),
    )?);

    let app_state = Arc::new(AppState::new(router, store, speech.clone(), speech));

    let app = http_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
