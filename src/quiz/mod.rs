//! Problem generation, answer judging and the ten-question session.

pub mod attempt;
pub mod error;
pub mod generator;
pub mod profile;
pub mod ranking;
pub mod selector;
pub mod session;
pub mod source;

pub use attempt::{AttemptState, Outcome, QuestionPhase};
pub use error::QuizError;
pub use ranking::Grade;
pub use session::{Progress, QuizSession, Selection, SessionPhase, SessionSummary, QUESTIONS_PER_SESSION};
pub use source::NumberSource;
