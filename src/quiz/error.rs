//! Error types for the quiz core

use thiserror::Error;

use crate::models::{Difficulty, QuizMode};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("{level} difficulty is not available {}", mode_clause(.mode))]
    InvalidLevel {
        level: Difficulty,
        mode: Option<QuizMode>,
    },

    #[error("operand range {min}..={max} cannot produce a valid problem")]
    DegenerateRange { min: i64, max: i64 },

    #[error("invalid selection: {0}")]
    SelectionInvalid(String),

    #[error("not a whole number: {0:?}")]
    MalformedInput(String),

    #[error("no quiz is in progress")]
    SessionNotActive,

    #[error("question is already resolved")]
    QuestionResolved,
}

fn mode_clause(mode: &Option<QuizMode>) -> String {
    match mode {
        Some(mode) => format!("in {} mode", mode),
        None => "without a mode".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = QuizError::InvalidLevel {
            level: Difficulty::Impossible,
            mode: Some(QuizMode::Standard),
        };
        assert_eq!(
            err.to_string(),
            "impossible difficulty is not available in standard mode"
        );

        let err = QuizError::InvalidLevel {
            level: Difficulty::Impossible,
            mode: None,
        };
        assert_eq!(
            err.to_string(),
            "impossible difficulty is not available without a mode"
        );

        let err = QuizError::MalformedInput("abc".to_string());
        assert_eq!(err.to_string(), "not a whole number: \"abc\"");
    }
}
