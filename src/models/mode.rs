use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::operation::Operation;

const BASIC_OPERATIONS: [Operation; 2] = [Operation::Add, Operation::Subtract];
const ALL_OPERATIONS: [Operation; 4] = [
    Operation::Add,
    Operation::Subtract,
    Operation::Multiply,
    Operation::Divide,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizMode {
    /// Addition and subtraction with unlimited retries.
    Standard,
    /// Adds multiplication and division.
    MultiplyDivide,
    /// Multiplication and division plus the 5-digit difficulty.
    ImpossibleExtras,
}

impl QuizMode {
    pub const ALL: [QuizMode; 3] = [
        QuizMode::Standard,
        QuizMode::MultiplyDivide,
        QuizMode::ImpossibleExtras,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizMode::Standard => "standard",
            QuizMode::MultiplyDivide => "multiply-divide",
            QuizMode::ImpossibleExtras => "impossible-extras",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuizMode::Standard => "Easy Mode",
            QuizMode::MultiplyDivide => "Multiplication and Division",
            QuizMode::ImpossibleExtras => "IMPOSSIBLE Mode",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuizMode::Standard => "You have INFINITE retries.",
            QuizMode::MultiplyDivide => "Adds multiplication and division.",
            QuizMode::ImpossibleExtras => {
                "Adds multiplication and division AND 5-digit questions."
            }
        }
    }

    pub fn operations(&self) -> &'static [Operation] {
        match self {
            QuizMode::Standard => &BASIC_OPERATIONS,
            QuizMode::MultiplyDivide | QuizMode::ImpossibleExtras => &ALL_OPERATIONS,
        }
    }

    pub fn unlimited_retries(&self) -> bool {
        matches!(self, QuizMode::Standard)
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations drawn from when the player starts without picking a mode.
pub fn default_operations() -> &'static [Operation] {
    &BASIC_OPERATIONS
}

/// Whether `level` may be selected under `mode`.
pub fn enables(mode: Option<QuizMode>, level: Difficulty) -> bool {
    level != Difficulty::Impossible || mode == Some(QuizMode::ImpossibleExtras)
}
