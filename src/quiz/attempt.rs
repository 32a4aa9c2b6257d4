use log::debug;
use serde::Serialize;

use crate::models::{Problem, QuizMode};

use super::error::QuizError;

pub const FIRST_ATTEMPT_POINTS: u32 = 10;
pub const SECOND_ATTEMPT_POINTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    AwaitingFirst,
    AwaitingSecond,
    Resolved,
}

/// Per-question attempt bookkeeping, replaced whenever a new problem is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptState {
    attempt_number: u8,
    resolved: bool,
}

impl Default for AttemptState {
    fn default() -> Self {
        Self {
            attempt_number: 1,
            resolved: false,
        }
    }
}

impl AttemptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempt_number(&self) -> u8 {
        self.attempt_number
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn phase(&self) -> QuestionPhase {
        match (self.resolved, self.attempt_number) {
            (true, _) => QuestionPhase::Resolved,
            (false, 1) => QuestionPhase::AwaitingFirst,
            (false, _) => QuestionPhase::AwaitingSecond,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Accepted { score_delta: u32 },
    RetryRequested,
    Revealed { correct_answer: i64 },
}

impl Outcome {
    pub fn score_delta(&self) -> u32 {
        match self {
            Outcome::Accepted { score_delta } => *score_delta,
            _ => 0,
        }
    }

    /// True when the question is closed and the quiz moves on.
    pub fn resolves_question(&self) -> bool {
        !matches!(self, Outcome::RetryRequested)
    }

    pub fn feedback(&self) -> String {
        match self {
            Outcome::Accepted { .. } => "Correct!".to_string(),
            Outcome::RetryRequested => "Incorrect! Try again.".to_string(),
            Outcome::Revealed { correct_answer } => {
                format!("Incorrect! The correct answer was {}.", correct_answer)
            }
        }
    }
}

pub fn parse_answer(raw: &str) -> Result<i64, QuizError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| QuizError::MalformedInput(raw.trim().to_string()))
}

/// Judges one submission. Malformed text is rejected before the attempt
/// state is touched, so it never costs the player an attempt.
pub fn evaluate(
    mode: Option<QuizMode>,
    attempt: &mut AttemptState,
    submitted: &str,
    problem: &Problem,
) -> Result<Outcome, QuizError> {
    if attempt.resolved {
        return Err(QuizError::QuestionResolved);
    }
    let answer = parse_answer(submitted)?;

    let outcome = if answer == problem.correct_answer() {
        attempt.resolved = true;
        let score_delta = if attempt.attempt_number == 1 {
            FIRST_ATTEMPT_POINTS
        } else {
            SECOND_ATTEMPT_POINTS
        };
        Outcome::Accepted { score_delta }
    } else if mode.is_some_and(|m| m.unlimited_retries()) {
        Outcome::RetryRequested
    } else if attempt.attempt_number == 1 {
        attempt.attempt_number = 2;
        Outcome::RetryRequested
    } else {
        attempt.resolved = true;
        Outcome::Revealed {
            correct_answer: problem.correct_answer(),
        }
    };

    debug!(
        "answer {} to {} -> {:?} (attempt {})",
        answer, problem, outcome, attempt.attempt_number
    );
    Ok(outcome)
}
