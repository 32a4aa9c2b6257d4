use chrono::Duration;

use crate::models::{Difficulty, QuizMode};
use crate::quiz::attempt::{FIRST_ATTEMPT_POINTS, SECOND_ATTEMPT_POINTS};
use crate::quiz::profile::available_difficulties;
use crate::quiz::{Progress, SessionSummary, QUESTIONS_PER_SESSION};

/// "Question N of 10" for the question currently open.
pub fn progress_label(progress: Progress) -> String {
    let current = (progress.question_index + 1).min(progress.total);
    format!("Question {} of {}", current, progress.total)
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn results_text(summary: &SessionSummary) -> String {
    format!("Your Score: {}\nRanking: {}", summary.score, summary.grade)
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.num_seconds().max(0);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

pub fn difficulty_line(level: Difficulty) -> String {
    let requirement = if available_difficulties(None).contains(&level) {
        String::new()
    } else {
        format!("  (requires --mode {})", QuizMode::ImpossibleExtras)
    };
    format!(
        "{:<13} {:<8} operands {}{}",
        level.display_name(),
        level.digits_label(),
        level.range(),
        requirement
    )
}

pub fn rules_text() -> String {
    let mut text = String::new();
    text.push_str(&format!(
        "This quiz has {} questions to solve. Each question is worth {} points.\n",
        QUESTIONS_PER_SESSION, FIRST_ATTEMPT_POINTS
    ));
    text.push_str(&format!(
        "If you get an answer wrong, you get another attempt worth {} points.\n",
        SECOND_ATTEMPT_POINTS
    ));
    text.push_str("\nDifficulties:\n");
    for level in Difficulty::ALL {
        text.push_str(&format!("  {}\n", difficulty_line(level)));
    }
    text.push_str("\nModes (optional, pick at most one):\n");
    for mode in QuizMode::ALL {
        text.push_str(&format!(
            "  {:<18} {} - {}\n",
            mode.as_str(),
            mode.display_name(),
            mode.description()
        ));
    }
    text.push_str("\nRanking: A+ >= 95, A >= 85, B >= 75, C >= 65, D >= 50, otherwise F.\n");
    text.push_str("Type `exit` during a quiz to leave it; your score is not kept.\n");
    text
}

pub fn display_rules() {
    println!("\n{}", "=".repeat(60));
    println!("  MATHQUIZ - How to Play");
    println!("{}\n", "=".repeat(60));
    print!("{}", rules_text());
    println!("\n{}\n", "=".repeat(60));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Grade;

    #[test]
    fn test_progress_label() {
        let label = progress_label(Progress {
            question_index: 0,
            total: 10,
        });
        assert_eq!(label, "Question 1 of 10");
        let label = progress_label(Progress {
            question_index: 10,
            total: 10,
        });
        assert_eq!(label, "Question 10 of 10");
    }

    #[test]
    fn test_results_text() {
        let summary = SessionSummary {
            mode: None,
            difficulty: Difficulty::Easy,
            score: 85,
            questions: 10,
            grade: Grade::A,
        };
        assert_eq!(results_text(&summary), "Your Score: 85\nRanking: A");
        assert_eq!(score_label(85), "Score: 85");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::seconds(42)), "42s");
        assert_eq!(format_elapsed(Duration::seconds(125)), "2m 5s");
        assert_eq!(format_elapsed(Duration::seconds(3725)), "1h 2m 5s");
        assert_eq!(format_elapsed(Duration::seconds(-3)), "0s");
    }

    #[test]
    fn test_difficulty_line_marks_locked_level() {
        assert!(!difficulty_line(Difficulty::Hard).contains("requires"));
        let line = difficulty_line(Difficulty::Impossible);
        assert!(line.contains("10000-99999"));
        assert!(line.contains("requires --mode impossible-extras"));
    }

    #[test]
    fn test_rules_mention_scoring() {
        let text = rules_text();
        assert!(text.contains("10 questions"));
        assert!(text.contains("worth 5 points"));
        assert!(text.contains("multiply-divide"));
    }
}
