// src/prompt/mod.rs
// System prompt construction for chat and affirmation turns

mod affirmation;
mod builder;

pub use affirmation::{build_affirmation_prompt, strip_wrapping_quotes, AffirmationSignals, DEFAULT_AFFIRMATION};
pub use builder::build_system_prompt;
