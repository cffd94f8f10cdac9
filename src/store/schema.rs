// src/store/schema.rs
//! Ensures the wellness tables match the latest schema.
//! Run at startup to guarantee schema compatibility.

use anyhow::Result;
use sqlx::{Executor, SqlitePool};

const CREATE_MOODS: &str = r#"
CREATE TABLE IF NOT EXISTS moods (
    id TEXT PRIMARY KEY,
    user_id TEXT,
    session_id TEXT,
    emoji TEXT NOT NULL,
    note TEXT,
    created_at DATETIME NOT NULL
);
"#;

const CREATE_ASSESSMENTS: &str = r#"
CREATE TABLE IF NOT EXISTS assessments (
    id TEXT PRIMARY KEY,
    user_id TEXT,
    session_id TEXT,
    type TEXT NOT NULL,
    score INTEGER NOT NULL,
    interpretation TEXT NOT NULL,
    created_at DATETIME NOT NULL
);
"#;

const CREATE_GOALS: &str = r#"
CREATE TABLE IF NOT EXISTS goals (
    id TEXT PRIMARY KEY,
    user_id TEXT,
    session_id TEXT,
    content TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending' CHECK (status IN ('pending', 'completed', 'cancelled')),
    reflection TEXT,
    date DATE NOT NULL
);
"#;

const CREATE_HABITS: &str = r#"
CREATE TABLE IF NOT EXISTS habits (
    id TEXT PRIMARY KEY,
    user_id TEXT,
    session_id TEXT,
    name TEXT NOT NULL,
    current_streak INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1
);
"#;

const CREATE_CHAT_HISTORY: &str = r#"
CREATE TABLE IF NOT EXISTS chat_history (
    id TEXT PRIMARY KEY,
    user_id TEXT,
    session_id TEXT,
    messages TEXT NOT NULL,
    saved INTEGER NOT NULL DEFAULT 0,
    created_at DATETIME NOT NULL
);
"#;

pub async fn init(pool: &SqlitePool) -> Result<()> {
    for statement in [
        CREATE_MOODS,
        CREATE_ASSESSMENTS,
        CREATE_GOALS,
        CREATE_HABITS,
        CREATE_CHAT_HISTORY,
    ] {
        pool.execute(statement).await?;
    }
    Ok(())
}
