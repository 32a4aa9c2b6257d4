use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use chrono::Local;
use log::debug;

use crate::display::{format_elapsed, progress_label, results_text, score_label};
use crate::models::config::{self, UserConfig};
use crate::quiz::{NumberSource, QuizError, QuizSession, Selection, SessionSummary};

use super::PlayArgs;

pub type PlayResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    Completed(SessionSummary),
    Abandoned,
}

pub fn play(args: PlayArgs) {
    let user_config = config::load_config();
    let selection = selection_from(&args, &user_config);
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| user_config.feedback_delay());
    let mut session = QuizSession::with_seed(args.seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = play_rounds(&mut session, &selection, &mut input, &mut out, delay) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Flags win; saved preferences fill whatever the flags leave out.
pub fn selection_from(args: &PlayArgs, user_config: &UserConfig) -> Selection {
    let modes = if args.modes.is_empty() {
        user_config.mode.into_iter().collect()
    } else {
        args.modes.clone()
    };
    let difficulties = if args.difficulties.is_empty() {
        vec![user_config.difficulty]
    } else {
        args.difficulties.clone()
    };
    Selection::from_marks(modes, difficulties)
}

/// Runs quizzes with the same selection until the player declines another.
pub fn play_rounds<S, R, W>(
    session: &mut QuizSession<S>,
    selection: &Selection,
    input: &mut R,
    out: &mut W,
    delay: Duration,
) -> PlayResult<()>
where
    S: NumberSource,
    R: BufRead,
    W: Write,
{
    loop {
        session.start(selection)?;
        let started = Local::now();

        match run_quiz(session, input, out, delay)? {
            RunEnd::Abandoned => {
                writeln!(out, "\nQuiz abandoned.")?;
                return Ok(());
            }
            RunEnd::Completed(_) => {
                let elapsed = Local::now().signed_duration_since(started);
                writeln!(out, "Time taken: {}", format_elapsed(elapsed))?;
                write!(out, "\nPlay again? [y/N] ")?;
                out.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Ok(());
                }
                if !matches!(line.trim().to_lowercase().as_str(), "y" | "yes") {
                    return Ok(());
                }
            }
        }
    }
}

/// Plays one started session to the end. Reading EOF or an exit word
/// abandons it.
pub fn run_quiz<S, R, W>(
    session: &mut QuizSession<S>,
    input: &mut R,
    out: &mut W,
    delay: Duration,
) -> PlayResult<RunEnd>
where
    S: NumberSource,
    R: BufRead,
    W: Write,
{
    let mut show_header = true;
    loop {
        if let Some(summary) = session.summary() {
            writeln!(out, "\n{}", results_text(summary))?;
            return Ok(RunEnd::Completed(*summary));
        }
        let Some(problem_text) = session.current_problem_text() else {
            return Err(QuizError::SessionNotActive.into());
        };

        if show_header {
            writeln!(
                out,
                "\n{} | {}",
                progress_label(session.progress()),
                score_label(session.score_snapshot())
            )?;
        }
        write!(out, "{}", problem_text)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0
            || EXIT_WORDS.contains(&line.trim().to_lowercase().as_str())
        {
            session.abandon();
            return Ok(RunEnd::Abandoned);
        }

        match session.submit_answer(&line) {
            Ok(outcome) => {
                writeln!(out, "{}", outcome.feedback())?;
                show_header = outcome.resolves_question();
                if show_header && !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            Err(QuizError::MalformedInput(raw)) => {
                debug!("re-prompting after {:?}", raw);
                writeln!(out, "Please enter a valid integer.")?;
                show_header = false;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
