// src/context/mod.rs
// Personalization payload types and the assembler that builds them from
// the wellness store.

mod assembler;

pub use assembler::{ContextAssembler, ASSESSMENT_CAP, MOOD_CAP, WINDOW_DAYS};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Scopes every wellness-store read to one account or one anonymous
/// session; exactly one variant is active per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    UserId(String),
    SessionId(String),
}

impl Subject {
    pub fn column(&self) -> &'static str {
        match self {
            Subject::UserId(_) => "user_id",
            Subject::SessionId(_) => "session_id",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Subject::UserId(v) | Subject::SessionId(v) => v,
        }
    }
}

/// A bounded snapshot of recent wellness signals, assembled fresh per
/// request. All fields optional; an all-empty payload is equivalent to
/// no personalization at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_moods: Vec<MoodEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assessments: Vec<AssessmentEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<GoalEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub habits: Vec<HabitEntry>,
}

impl UserContext {
    pub fn is_empty(&self) -> bool {
        self.recent_moods.is_empty()
            && self.assessments.is_empty()
            && self.goals.is_empty()
            && self.habits.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub emoji: String,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub score: i64,
    pub interpretation: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Pending,
    Completed,
    Cancelled,
}

impl GoalStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "completed" => GoalStatus::Completed,
            "cancelled" => GoalStatus::Cancelled,
            _ => GoalStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalEntry {
    pub content: String,
    pub status: GoalStatus,
    #[serde(default)]
    pub reflection: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitEntry {
    pub name: String,
    pub current_streak: i64,
}
