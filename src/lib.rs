// src/lib.rs
// Solace backend library root

pub mod api;
pub mod config;
pub mod context;
pub mod llm;
pub mod persona;
pub mod prompt;
pub mod state;
pub mod store;
pub mod voice;
