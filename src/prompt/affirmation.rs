// src/prompt/affirmation.rs
// Single-turn prompt for generating a personalized affirmation from
// caller-supplied wellness signals.

use serde::Deserialize;

/// Served whenever generation fails or produces nothing usable. The
/// affirmation endpoint never surfaces an error to the client.
pub const DEFAULT_AFFIRMATION: &str = "You are doing your best, and that is enough.";

/// Signals the client sends for affirmation generation. Distinct from
/// the chat context payload: assessments carry a max score here, and
/// goals are only counted by status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AffirmationSignals {
    #[serde(default)]
    pub moods: Vec<AffirmationMood>,
    #[serde(default)]
    pub assessments: Vec<AffirmationAssessment>,
    #[serde(default)]
    pub goals: Vec<AffirmationGoal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AffirmationMood {
    pub emoji: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AffirmationAssessment {
    #[serde(rename = "type")]
    pub kind: String,
    pub score: i64,
    pub max_score: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AffirmationGoal {
    pub status: String,
}

/// Build the one-shot user prompt for affirmation generation.
pub fn build_affirmation_prompt(signals: &AffirmationSignals) -> String {
    let mut context = String::from("Generate a personalized affirmation based on this user data:\n\n");

    if !signals.moods.is_empty() {
        let emojis: Vec<&str> = signals.moods.iter().map(|m| m.emoji.as_str()).collect();
        context.push_str(&format!("Recent moods (last 7 days): {}\n", emojis.join(" ")));

        let notes: Vec<&str> = signals
            .moods
            .iter()
            .filter_map(|m| m.note.as_deref())
            .collect();
        if !notes.is_empty() {
            context.push_str(&format!("Mood notes: {}\n", notes.join("; ")));
        }
    }

    if !signals.assessments.is_empty() {
        context.push_str("\nRecent assessments:\n");
        for a in &signals.assessments {
            let percentage = if a.max_score > 0 {
                ((a.score as f64 / a.max_score as f64) * 100.0).round() as i64
            } else {
                0
            };
            context.push_str(&format!("- {}: {}% severity\n", a.kind, percentage));
        }
    }

    if !signals.goals.is_empty() {
        let completed = signals.goals.iter().filter(|g| g.status == "completed").count();
        context.push_str(&format!(
            "\nGoals: {} of {} completed recently\n",
            completed,
            signals.goals.len()
        ));
    }

    context.push_str(
        "\nCreate ONE short, personalized affirmation (1-2 sentences max) that:\n\
         - Speaks directly to where this person is right now\n\
         - Is compassionate and validating\n\
         - Offers a gentle reframe or encouragement\n\
         - Feels authentic, not generic\n\
         \n\
         Return ONLY the affirmation text, no explanation or formatting.",
    );

    context
}

/// Models sometimes wrap the affirmation in quotes despite being asked
/// not to; drop one matching leading/trailing pair.
pub fn strip_wrapping_quotes(text: &str) -> &str {
    let trimmed = text.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_signals_still_produce_instructions() {
        let prompt = build_affirmation_prompt(&AffirmationSignals::default());
        assert!(prompt.starts_with("Generate a personalized affirmation"));
        assert!(prompt.contains("Return ONLY the affirmation text"));
        assert!(!prompt.contains("Recent moods"));
        assert!(!prompt.contains("Goals:"));
    }

    #[test]
    fn test_mood_line_joins_emojis_and_notes() {
        let signals = AffirmationSignals {
            moods: vec![
                AffirmationMood {
                    emoji: "😊".to_string(),
                    note: Some("sunny day".to_string()),
                },
                AffirmationMood {
                    emoji: "😴".to_string(),
                    note: None,
                },
            ],
            ..Default::default()
        };

        let prompt = build_affirmation_prompt(&signals);
        assert!(prompt.contains("Recent moods (last 7 days): 😊 😴\n"));
        assert!(prompt.contains("Mood notes: sunny day\n"));
    }

    #[test]
    fn test_assessment_percentage_rounded() {
        let signals = AffirmationSignals {
            assessments: vec![AffirmationAssessment {
                kind: "gad-7".to_string(),
                score: 5,
                max_score: 21,
            }],
            ..Default::default()
        };

        // 5/21 = 23.8%, rounds to 24
        let prompt = build_affirmation_prompt(&signals);
        assert!(prompt.contains("- gad-7: 24% severity\n"));
    }

    #[test]
    fn test_zero_max_score_does_not_divide() {
        let signals = AffirmationSignals {
            assessments: vec![AffirmationAssessment {
                kind: "phq-9".to_string(),
                score: 3,
                max_score: 0,
            }],
            ..Default::default()
        };

        let prompt = build_affirmation_prompt(&signals);
        assert!(prompt.contains("- phq-9: 0% severity\n"));
    }

    #[test]
    fn test_goal_completion_counts() {
        let signals = AffirmationSignals {
            goals: vec![
                AffirmationGoal {
                    status: "completed".to_string(),
                },
                AffirmationGoal {
                    status: "pending".to_string(),
                },
                AffirmationGoal {
                    status: "completed".to_string(),
                },
            ],
            ..Default::default()
        };

        let prompt = build_affirmation_prompt(&signals);
        assert!(prompt.contains("Goals: 2 of 3 completed recently\n"));
    }

    #[test]
    fn test_strip_wrapping_quotes() {
        assert_eq!(strip_wrapping_quotes("\"You are enough.\""), "You are enough.");
        assert_eq!(strip_wrapping_quotes("'You are enough.'"), "You are enough.");
        assert_eq!(strip_wrapping_quotes("You are enough."), "You are enough.");
        assert_eq!(strip_wrapping_quotes("\"mismatched'"), "\"mismatched'");
        assert_eq!(strip_wrapping_quotes("\""), "\"");
    }
}
