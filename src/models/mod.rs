pub mod config;
pub mod difficulty;
pub mod mode;
pub mod operation;
pub mod problem;

// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use difficulty::{Difficulty, OperandRange};
pub use mode::QuizMode;
pub use operation::Operation;
pub use problem::Problem;
