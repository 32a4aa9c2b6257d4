mod difficulty_cmd;
mod mode_cmd;
mod play;
mod rules;

use clap::{Args, Parser, Subcommand};

use crate::models::{Difficulty, QuizMode};

pub use play::{play_rounds, run_quiz, selection_from, PlayResult, RunEnd};

#[derive(Parser)]
#[command(name = "mathquiz")]
#[command(about = "Ten-question arithmetic quiz", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a quiz (the default when no command is given)
    Play(PlayArgs),
    /// Show or set the preferred difficulty
    Difficulty {
        #[arg(value_enum)]
        level: Option<Difficulty>,
    },
    /// Show or set the preferred mode
    Mode {
        #[arg(value_enum)]
        mode: Option<QuizMode>,
        /// Forget the preferred mode
        #[arg(long, conflicts_with = "mode")]
        clear: bool,
    },
    /// Explain scoring, difficulties and modes
    Rules,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Quiz mode; falls back to the saved preference
    #[arg(short = 'm', long = "mode", value_enum)]
    pub modes: Vec<QuizMode>,
    /// Difficulty; falls back to the saved preference
    #[arg(short = 'd', long = "difficulty", value_enum)]
    pub difficulties: Vec<Difficulty>,
    /// Seed for a reproducible set of questions
    #[arg(long)]
    pub seed: Option<u64>,
    /// Pause after each resolved question, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

pub fn run(cli: Cli) {
    match cli.command {
        None => play::play(PlayArgs::default()),
        Some(Commands::Play(args)) => play::play(args),
        Some(Commands::Difficulty { level }) => difficulty_cmd::handle_difficulty(level),
        Some(Commands::Mode { mode, clear }) => mode_cmd::handle_mode(mode, clear),
        Some(Commands::Rules) => rules::show_rules(),
    }
}
