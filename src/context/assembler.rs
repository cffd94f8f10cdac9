// src/context/assembler.rs
// Builds a UserContext from four independent wellness-store reads.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::warn;

use super::{Subject, UserContext};
use crate::store::WellnessStore;

/// Look-back window for moods and goals, in days.
pub const WINDOW_DAYS: i64 = 7;
/// At most this many mood entries per payload.
pub const MOOD_CAP: i64 = 10;
/// Most recent assessments regardless of age.
pub const ASSESSMENT_CAP: i64 = 5;

/// Assembles the personalization payload for one subject. The four
/// reads run concurrently and are one-shot: a failed read degrades its
/// field to empty instead of failing the whole assembly.
#[derive(Clone)]
pub struct ContextAssembler {
    store: Arc<WellnessStore>,
}

impl ContextAssembler {
    pub fn new(store: Arc<WellnessStore>) -> Self {
        Self { store }
    }

    pub async fn assemble(&self, subject: &Subject) -> UserContext {
        let since = Utc::now() - Duration::days(WINDOW_DAYS);

        let (moods, assessments, goals, habits) = tokio::join!(
            self.store.recent_moods(subject, since, MOOD_CAP),
            self.store.recent_assessments(subject, ASSESSMENT_CAP),
            self.store.recent_goals(subject, since.date_naive()),
            self.store.active_habits(subject),
        );

        UserContext {
            recent_moods: moods.unwrap_or_else(|e| {
                warn!("mood read failed, omitting from context: {e:#}");
                Vec::new()
            }),
            assessments: assessments.unwrap_or_else(|e| {
                warn!("assessment read failed, omitting from context: {e:#}");
                Vec::new()
            }),
            goals: goals.unwrap_or_else(|e| {
                warn!("goal read failed, omitting from context: {e:#}");
                Vec::new()
            }),
            habits: habits.unwrap_or_else(|e| {
                warn!("habit read failed, omitting from context: {e:#}");
                Vec::new()
            }),
        }
    }
}
