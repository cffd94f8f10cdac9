// src/prompt/builder.rs
// Renders the support system prompt, optionally extended with a
// consented user-context section.

use crate::context::{GoalStatus, UserContext};
use crate::persona::SUPPORT_PERSONA_PROMPT;

const DATE_FMT: &str = "%Y-%m-%d";

/// Build the system prompt for a chat turn.
///
/// Without context (or with an all-empty payload) this returns the base
/// persona unchanged, byte for byte. With context it appends one
/// delimited section listing whatever signal groups are present, in a
/// fixed order.
pub fn build_system_prompt(user_context: Option<&UserContext>) -> String {
    let Some(ctx) = user_context else {
        return SUPPORT_PERSONA_PROMPT.to_string();
    };
    if ctx.is_empty() {
        return SUPPORT_PERSONA_PROMPT.to_string();
    }

    let mut parts: Vec<String> = Vec::new();

    if !ctx.recent_moods.is_empty() {
        parts.push("Recent Mood Patterns (last 7 days):".to_string());
        for mood in &ctx.recent_moods {
            let date = mood.created_at.format(DATE_FMT);
            match &mood.note {
                Some(note) => parts.push(format!("- {}: {} - \"{}\"", date, mood.emoji, note)),
                None => parts.push(format!("- {}: {}", date, mood.emoji)),
            }
        }
    }

    if !ctx.assessments.is_empty() {
        if !parts.is_empty() {
            parts.push(String::new());
        }
        parts.push("Assessment Results:".to_string());
        for a in &ctx.assessments {
            parts.push(format!(
                "- {} ({}): Score {} - {}",
                a.kind.to_uppercase(),
                a.created_at.format(DATE_FMT),
                a.score,
                a.interpretation,
            ));
        }
    }

    if !ctx.goals.is_empty() {
        if !parts.is_empty() {
            parts.push(String::new());
        }
        parts.push("Recent Goals & Reflections:".to_string());

        // Goals arrive sorted by date, so grouping is a scan over
        // contiguous runs.
        let mut idx = 0;
        while idx < ctx.goals.len() {
            let date = ctx.goals[idx].date;
            parts.push(format!("  {}:", date.format(DATE_FMT)));

            let mut reflection = None;
            while idx < ctx.goals.len() && ctx.goals[idx].date == date {
                let goal = &ctx.goals[idx];
                let mark = if goal.status == GoalStatus::Completed {
                    "✓"
                } else {
                    " "
                };
                parts.push(format!("    - [{}] {}", mark, goal.content));
                if reflection.is_none() {
                    reflection = goal.reflection.as_deref();
                }
                idx += 1;
            }
            if let Some(text) = reflection {
                parts.push(format!("    Reflection: \"{}\"", text));
            }
        }
    }

    if !ctx.habits.is_empty() {
        if !parts.is_empty() {
            parts.push(String::new());
        }
        parts.push("Active Habits:".to_string());
        for habit in &ctx.habits {
            parts.push(format!(
                "- {} (streak: {} days)",
                habit.name, habit.current_streak
            ));
        }
    }

    format!(
        "{}\n\n--- USER CONTEXT (shared with consent) ---\n\n{}\n\n--- END USER CONTEXT ---\n\n\
         Use this context to provide personalized support. Reference their patterns, progress, \
         reflections, and challenges when appropriate. Be encouraging about positive trends and \
         gently curious about difficult patterns.",
        SUPPORT_PERSONA_PROMPT,
        parts.join("\n"),
    )
}
