// tests/context_assembly.rs
// Context assembler against a seeded in-memory store: windows, caps,
// filters, and degradation when a read fails.

mod support;

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use solace::context::{ContextAssembler, GoalStatus, Subject};

use support::test_store;

async fn seed_mood(pool: &SqlitePool, user_id: &str, emoji: &str, days_ago: i64) {
    sqlx::query(
        "INSERT INTO moods (id, user_id, emoji, note, created_at) VALUES (?, ?, ?, NULL, ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(emoji)
    .bind(Utc::now() - Duration::days(days_ago))
    .execute(pool)
    .await
    .expect("seed mood");
}

async fn seed_assessment(pool: &SqlitePool, user_id: &str, kind: &str, score: i64, days_ago: i64) {
    sqlx::query(
        "INSERT INTO assessments (id, user_id, type, score, interpretation, created_at) \
         VALUES (?, ?, ?, ?, 'Mild', ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(kind)
    .bind(score)
    .bind(Utc::now() - Duration::days(days_ago))
    .execute(pool)
    .await
    .expect("seed assessment");
}

async fn seed_goal(pool: &SqlitePool, user_id: &str, content: &str, status: &str, days_ago: i64) {
    sqlx::query(
        "INSERT INTO goals (id, user_id, content, status, date) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(content)
    .bind(status)
    .bind((Utc::now() - Duration::days(days_ago)).date_naive())
    .execute(pool)
    .await
    .expect("seed goal");
}

async fn seed_habit(pool: &SqlitePool, user_id: &str, name: &str, streak: i64, active: bool) {
    sqlx::query(
        "INSERT INTO habits (id, user_id, name, current_streak, is_active) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(name)
    .bind(streak)
    .bind(active as i64)
    .execute(pool)
    .await
    .expect("seed habit");
}

#[tokio::test]
async fn empty_store_yields_empty_context() {
    let (store, _pool) = test_store().await;
    let assembler = ContextAssembler::new(store);

    let ctx = assembler.assemble(&Subject::UserId("u1".to_string())).await;
    assert!(ctx.is_empty());
}

#[tokio::test]
async fn moods_windowed_and_capped() {
    let (store, pool) = test_store().await;
    for _ in 0..12 {
        seed_mood(&pool, "u1", "🙂", 0).await;
    }
    seed_mood(&pool, "u1", "😴", 9).await;

    let assembler = ContextAssembler::new(store);
    let ctx = assembler.assemble(&Subject::UserId("u1".to_string())).await;

    // 12 in-window entries capped to 10; the 9-day-old one never appears
    assert_eq!(ctx.recent_moods.len(), 10);
    assert!(ctx.recent_moods.iter().all(|m| m.emoji == "🙂"));
}

#[tokio::test]
async fn assessments_capped_but_not_windowed() {
    let (store, pool) = test_store().await;
    // Old entries still count toward the most-recent-5
    seed_assessment(&pool, "u1", "phq-9", 4, 60).await;
    for i in 0..5 {
        seed_assessment(&pool, "u1", "gad-7", i, i).await;
    }

    let assembler = ContextAssembler::new(store);
    let ctx = assembler.assemble(&Subject::UserId("u1".to_string())).await;

    assert_eq!(ctx.assessments.len(), 5);
    assert!(ctx.assessments.iter().all(|a| a.kind == "gad-7"));
}

#[tokio::test]
async fn goals_windowed_with_parsed_status() {
    let (store, pool) = test_store().await;
    seed_goal(&pool, "u1", "Go outside", "completed", 1).await;
    seed_goal(&pool, "u1", "Sleep early", "pending", 2).await;
    seed_goal(&pool, "u1", "Old goal", "completed", 30).await;

    let assembler = ContextAssembler::new(store);
    let ctx = assembler.assemble(&Subject::UserId("u1".to_string())).await;

    assert_eq!(ctx.goals.len(), 2);
    assert_eq!(ctx.goals[0].content, "Go outside");
    assert_eq!(ctx.goals[0].status, GoalStatus::Completed);
    assert_eq!(ctx.goals[1].status, GoalStatus::Pending);
}

#[tokio::test]
async fn inactive_habits_excluded() {
    let (store, pool) = test_store().await;
    seed_habit(&pool, "u1", "Meditation", 5, true).await;
    seed_habit(&pool, "u1", "Cold showers", 2, false).await;

    let assembler = ContextAssembler::new(store);
    let ctx = assembler.assemble(&Subject::UserId("u1".to_string())).await;

    assert_eq!(ctx.habits.len(), 1);
    assert_eq!(ctx.habits[0].name, "Meditation");
    assert_eq!(ctx.habits[0].current_streak, 5);
}

#[tokio::test]
async fn subjects_are_isolated() {
    let (store, pool) = test_store().await;
    seed_mood(&pool, "u1", "🙂", 0).await;
    sqlx::query(
        "INSERT INTO moods (id, session_id, emoji, note, created_at) VALUES (?, 'anon-7', '😢', NULL, ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(Utc::now())
    .execute(&pool)
    .await
    .expect("seed session mood");

    let assembler = ContextAssembler::new(store);

    let for_user = assembler.assemble(&Subject::UserId("u1".to_string())).await;
    assert_eq!(for_user.recent_moods.len(), 1);
    assert_eq!(for_user.recent_moods[0].emoji, "🙂");

    let for_session = assembler
        .assemble(&Subject::SessionId("anon-7".to_string()))
        .await;
    assert_eq!(for_session.recent_moods.len(), 1);
    assert_eq!(for_session.recent_moods[0].emoji, "😢");
}

#[tokio::test]
async fn failed_read_degrades_to_empty_field() {
    let (store, pool) = test_store().await;
    seed_mood(&pool, "u1", "🙂", 0).await;
    seed_habit(&pool, "u1", "Journaling", 3, true).await;

    // Breaking one table must not take down the whole assembly
    sqlx::query("DROP TABLE goals")
        .execute(&pool)
        .await
        .expect("drop goals");

    let assembler = ContextAssembler::new(store);
    let ctx = assembler.assemble(&Subject::UserId("u1".to_string())).await;

    assert!(ctx.goals.is_empty());
    assert_eq!(ctx.recent_moods.len(), 1);
    assert_eq!(ctx.habits.len(), 1);
}

#[tokio::test]
async fn assembly_is_repeatable_without_writes() {
    let (store, pool) = test_store().await;
    seed_mood(&pool, "u1", "🙂", 1).await;
    seed_goal(&pool, "u1", "Walk", "pending", 1).await;

    let assembler = ContextAssembler::new(store);
    let subject = Subject::UserId("u1".to_string());

    let first = assembler.assemble(&subject).await;
    let second = assembler.assemble(&subject).await;
    assert_eq!(first, second);
}
