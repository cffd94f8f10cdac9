// src/config/mod.rs
// All runtime configuration comes from the environment (.env supported).
// Adapter credentials are read here once and injected at startup; no
// module-level API clients anywhere else in the crate.

use once_cell::sync::Lazy;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SolaceConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── Database
    pub database_url: String,
    pub sqlite_max_connections: u32,

    // ── Primary backend (Gemini, standard tier)
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_max_tokens: usize,

    // ── Secondary backend (Claude, escalation tier)
    pub anthropic_api_key: String,
    pub claude_model: String,
    pub claude_max_tokens: usize,

    // ── Speech services (voice extension)
    pub openai_api_key: String,
    pub tts_model: String,
    pub tts_voice: String,
    pub tts_speed: f32,
    pub stt_model: String,
    pub stt_language: String,

    // ── Timeouts (seconds); a hung backend call must never block the
    //    fallback path, so these bound every outbound request.
    pub model_timeout: u64,
    pub speech_timeout: u64,

    // ── Logging
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl SolaceConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            host: env_var_or("SOLACE_HOST", "0.0.0.0".to_string()),
            port: env_var_or("SOLACE_PORT", 3002),
            database_url: env_var_or("DATABASE_URL", "sqlite:./solace.db".to_string()),
            sqlite_max_connections: env_var_or("SQLITE_MAX_CONNECTIONS", 5),
            google_api_key: env_var_or("GOOGLE_API_KEY", String::new()),
            gemini_model: env_var_or("SOLACE_GEMINI_MODEL", "gemini-2.0-flash".to_string()),
            gemini_max_tokens: env_var_or("SOLACE_GEMINI_MAX_TOKENS", 1024),
            anthropic_api_key: env_var_or("ANTHROPIC_API_KEY", String::new()),
            claude_model: env_var_or(
                "SOLACE_CLAUDE_MODEL",
                "claude-sonnet-4-20250514".to_string(),
            ),
            claude_max_tokens: env_var_or("SOLACE_CLAUDE_MAX_TOKENS", 1024),
            openai_api_key: env_var_or("OPENAI_API_KEY", String::new()),
            tts_model: env_var_or("SOLACE_TTS_MODEL", "tts-1-hd".to_string()),
            tts_voice: env_var_or("SOLACE_TTS_VOICE", "nova".to_string()),
            tts_speed: env_var_or("SOLACE_TTS_SPEED", 0.9),
            stt_model: env_var_or("SOLACE_STT_MODEL", "whisper-1".to_string()),
            stt_language: env_var_or("SOLACE_STT_LANGUAGE", "en".to_string()),
            model_timeout: env_var_or("SOLACE_MODEL_TIMEOUT", 30),
            speech_timeout: env_var_or("SOLACE_SPEECH_TIMEOUT", 60),
            log_level: env_var_or("SOLACE_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Bounded timeout for model backend requests
    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout)
    }

    /// Bounded timeout for transcription/synthesis requests
    pub fn speech_timeout(&self) -> Duration {
        Duration::from_secs(self.speech_timeout)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<SolaceConfig> = Lazy::new(SolaceConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SolaceConfig::from_env();

        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.tts_voice, "nova");
        assert!(config.model_timeout > 0);
    }

    #[test]
    fn test_bind_address() {
        let config = SolaceConfig::from_env();
        assert!(config.bind_address().contains(':'));
    }
}
