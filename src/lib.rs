pub mod cli;
pub mod display;
pub mod models;
pub mod quiz;

pub use quiz::{Grade, Outcome, QuizError, QuizSession, Selection};
