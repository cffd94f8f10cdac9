// src/store/mod.rs
// Wellness store access: four time-filterable read queries feeding the
// context assembler, plus the append sink for saved conversations.
// The core treats this as an external collaborator; no business logic here.

mod schema;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::context::{
    AssessmentEntry, GoalEntry, GoalStatus, HabitEntry, MoodEntry, Subject,
};
use crate::llm::provider::ChatMessage;

pub struct WellnessStore {
    pool: SqlitePool,
}

impl WellnessStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Ensure all tables exist. Run at startup.
    pub async fn init_schema(&self) -> Result<()> {
        schema::init(&self.pool).await
    }

    /// Moods inside the window, newest first, capped.
    pub async fn recent_moods(
        &self,
        subject: &Subject,
        since: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<MoodEntry>> {
        let sql = format!(
            "SELECT emoji, note, created_at FROM moods \
             WHERE {} = ? AND created_at >= ? \
             ORDER BY created_at DESC LIMIT ?",
            subject.column()
        );
        let rows = sqlx::query_as::<_, MoodRow>(&sql)
            .bind(subject.value())
            .bind(since)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(MoodRow::into_entry).collect())
    }

    /// Most recent assessments regardless of age, newest first, capped.
    pub async fn recent_assessments(
        &self,
        subject: &Subject,
        limit: i64,
    ) -> Result<Vec<AssessmentEntry>> {
        let sql = format!(
            "SELECT type, score, interpretation, created_at FROM assessments \
             WHERE {} = ? ORDER BY created_at DESC LIMIT ?",
            subject.column()
        );
        let rows = sqlx::query_as::<_, AssessmentRow>(&sql)
            .bind(subject.value())
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(AssessmentRow::into_entry).collect())
    }

    /// Goals dated inside the window, newest first. Bounded by the
    /// window rather than a row cap.
    pub async fn recent_goals(
        &self,
        subject: &Subject,
        since: NaiveDate,
    ) -> Result<Vec<GoalEntry>> {
        let sql = format!(
            "SELECT content, status, reflection, date FROM goals \
             WHERE {} = ? AND date >= ? ORDER BY date DESC",
            subject.column()
        );
        let rows = sqlx::query_as::<_, GoalRow>(&sql)
            .bind(subject.value())
            .bind(since)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(GoalRow::into_entry).collect())
    }

    /// Currently-active habits, no time window.
    pub async fn active_habits(&self, subject: &Subject) -> Result<Vec<HabitEntry>> {
        let sql = format!(
            "SELECT name, current_streak FROM habits \
             WHERE {} = ? AND is_active = 1",
            subject.column()
        );
        let rows = sqlx::query_as::<_, HabitRow>(&sql)
            .bind(subject.value())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(HabitRow::into_entry).collect())
    }

    /// Persist a finished conversation. Fire-and-forget from the core's
    /// perspective: callers surface errors but never retry.
    pub async fn save_conversation(
        &self,
        subject: &Subject,
        messages: &[ChatMessage],
    ) -> Result<()> {
        let sql = format!(
            "INSERT INTO chat_history (id, {}, messages, saved, created_at) \
             VALUES (?, ?, ?, 1, ?)",
            subject.column()
        );
        sqlx::query(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(subject.value())
            .bind(serde_json::to_string(messages)?)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// ----- Row shapes -----

#[derive(sqlx::FromRow)]
struct MoodRow {
    emoji: String,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl MoodRow {
    fn into_entry(self) -> MoodEntry {
        MoodEntry {
            emoji: self.emoji,
            note: self.note,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AssessmentRow {
    #[sqlx(rename = "type")]
    kind: String,
    score: i64,
    interpretation: String,
    created_at: DateTime<Utc>,
}

impl AssessmentRow {
    fn into_entry(self) -> AssessmentEntry {
        AssessmentEntry {
            kind: self.kind,
            score: self.score,
            interpretation: self.interpretation,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct GoalRow {
    content: String,
    status: String,
    reflection: Option<String>,
    date: NaiveDate,
}

impl GoalRow {
    fn into_entry(self) -> GoalEntry {
        GoalEntry {
            content: self.content,
            status: GoalStatus::parse(&self.status),
            reflection: self.reflection,
            date: self.date,
        }
    }
}

#[derive(sqlx::FromRow)]
struct HabitRow {
    name: String,
    current_streak: i64,
}

impl HabitRow {
    fn into_entry(self) -> HabitEntry {
        HabitEntry {
            name: self.name,
            current_streak: self.current_streak,
        }
    }
}
