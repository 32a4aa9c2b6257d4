use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::{Difficulty, Problem, QuizMode};

use super::attempt::{self, AttemptState, Outcome};
use super::error::QuizError;
use super::generator;
use super::profile::range_for;
use super::ranking::Grade;
use super::source::NumberSource;

pub const QUESTIONS_PER_SESSION: u32 = 10;

/// The modes and difficulties a player has marked before starting. Marking
/// the same entry twice counts once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    modes: Vec<QuizMode>,
    difficulties: Vec<Difficulty>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(mode: Option<QuizMode>, difficulty: Difficulty) -> Self {
        let selection = Self::new().mark_difficulty(difficulty);
        match mode {
            Some(mode) => selection.mark_mode(mode),
            None => selection,
        }
    }

    pub fn from_marks(
        modes: impl IntoIterator<Item = QuizMode>,
        difficulties: impl IntoIterator<Item = Difficulty>,
    ) -> Self {
        let selection = modes.into_iter().fold(Self::new(), Self::mark_mode);
        difficulties.into_iter().fold(selection, Self::mark_difficulty)
    }

    pub fn mark_mode(mut self, mode: QuizMode) -> Self {
        if !self.modes.contains(&mode) {
            self.modes.push(mode);
        }
        self
    }

    pub fn mark_difficulty(mut self, difficulty: Difficulty) -> Self {
        if !self.difficulties.contains(&difficulty) {
            self.difficulties.push(difficulty);
        }
        self
    }

    pub fn modes(&self) -> &[QuizMode] {
        &self.modes
    }

    pub fn difficulties(&self) -> &[Difficulty] {
        &self.difficulties
    }

    /// At most one mode, exactly one difficulty, and the pair must be allowed.
    pub fn resolve(&self) -> Result<(Option<QuizMode>, Difficulty), QuizError> {
        let mode = match self.modes.as_slice() {
            [] => None,
            [mode] => Some(*mode),
            many => {
                return Err(QuizError::SelectionInvalid(format!(
                    "choose at most one mode ({} marked)",
                    many.len()
                )))
            }
        };
        let difficulty = match self.difficulties.as_slice() {
            [difficulty] => *difficulty,
            other => {
                return Err(QuizError::SelectionInvalid(format!(
                    "choose exactly one difficulty ({} marked)",
                    other.len()
                )))
            }
        };
        range_for(difficulty, mode).map_err(|e| QuizError::SelectionInvalid(e.to_string()))?;
        Ok((mode, difficulty))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub question_index: u32,
    pub total: u32,
}

/// A run in progress. Only [`QuizSession`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    mode: Option<QuizMode>,
    difficulty: Difficulty,
    question_index: u32,
    score: u32,
    current_problem: Problem,
    current_attempt: AttemptState,
}

impl SessionState {
    pub fn mode(&self) -> Option<QuizMode> {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn question_index(&self) -> u32 {
        self.question_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_problem(&self) -> &Problem {
        &self.current_problem
    }

    pub fn current_attempt(&self) -> AttemptState {
        self.current_attempt
    }
}

/// What is left of a run once every question is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub mode: Option<QuizMode>,
    pub difficulty: Difficulty,
    pub score: u32,
    pub questions: u32,
    pub grade: Grade,
}

#[derive(Debug, Clone)]
enum Phase {
    NotStarted,
    InProgress(SessionState),
    Completed(SessionSummary),
}

/// Drives one ten-question run: deal a problem, judge answers, advance,
/// grade. All transitions happen synchronously inside the calls below.
#[derive(Debug)]
pub struct QuizSession<S = StdRng> {
    source: S,
    phase: Phase,
}

impl QuizSession<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<S> QuizSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            phase: Phase::NotStarted,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.phase {
            Phase::NotStarted => SessionPhase::NotStarted,
            Phase::InProgress(_) => SessionPhase::InProgress,
            Phase::Completed(_) => SessionPhase::Completed,
        }
    }

    pub fn state(&self) -> Option<&SessionState> {
        match &self.phase {
            Phase::InProgress(state) => Some(state),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        match &self.phase {
            Phase::Completed(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn current_problem(&self) -> Option<&Problem> {
        self.state().map(|state| &state.current_problem)
    }

    pub fn current_problem_text(&self) -> Option<String> {
        self.current_problem().map(Problem::text)
    }

    pub fn progress(&self) -> Progress {
        let question_index = match &self.phase {
            Phase::NotStarted => 0,
            Phase::InProgress(state) => state.question_index,
            Phase::Completed(summary) => summary.questions,
        };
        Progress {
            question_index,
            total: QUESTIONS_PER_SESSION,
        }
    }

    pub fn score_snapshot(&self) -> u32 {
        match &self.phase {
            Phase::NotStarted => 0,
            Phase::InProgress(state) => state.score,
            Phase::Completed(summary) => summary.score,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Completed(_))
    }

    pub fn ranking(&self) -> Option<Grade> {
        self.summary().map(|summary| summary.grade)
    }

    /// Drops the run from any phase. Nothing of it is kept.
    pub fn abandon(&mut self) {
        if let Phase::InProgress(state) = &self.phase {
            info!(
                "abandoned quiz at question {} with score {}",
                state.question_index + 1,
                state.score
            );
        }
        self.phase = Phase::NotStarted;
    }
}

impl<S: NumberSource> QuizSession<S> {
    /// Validates the selection and deals the first problem. Starting again
    /// from any phase replaces the previous run.
    pub fn start(&mut self, selection: &Selection) -> Result<(), QuizError> {
        let (mode, difficulty) = selection.resolve()?;
        let first = generator::generate(mode, difficulty, &mut self.source)?;

        self.phase = Phase::InProgress(SessionState {
            mode,
            difficulty,
            question_index: 0,
            score: 0,
            current_problem: first,
            current_attempt: AttemptState::new(),
        });
        info!(
            "started {} quiz ({})",
            difficulty,
            mode.map_or("no mode", |m| m.as_str())
        );
        Ok(())
    }

    pub fn start_with(&mut self, mode: Option<QuizMode>, difficulty: Difficulty) -> Result<(), QuizError> {
        self.start(&Selection::of(mode, difficulty))
    }

    pub fn submit_answer(&mut self, raw: &str) -> Result<Outcome, QuizError> {
        let Phase::InProgress(state) = &mut self.phase else {
            return Err(QuizError::SessionNotActive);
        };

        let outcome = attempt::evaluate(
            state.mode,
            &mut state.current_attempt,
            raw,
            &state.current_problem,
        )?;
        if !outcome.resolves_question() {
            return Ok(outcome);
        }

        state.score += outcome.score_delta();
        state.question_index += 1;

        if state.question_index >= QUESTIONS_PER_SESSION {
            let summary = SessionSummary {
                mode: state.mode,
                difficulty: state.difficulty,
                score: state.score,
                questions: state.question_index,
                grade: Grade::from_score(state.score),
            };
            info!(
                "quiz complete: score {} ranking {}",
                summary.score, summary.grade
            );
            self.phase = Phase::Completed(summary);
        } else {
            state.current_problem = generator::generate(state.mode, state.difficulty, &mut self.source)?;
            state.current_attempt = AttemptState::new();
            debug!(
                "question {} of {}",
                state.question_index + 1,
                QUESTIONS_PER_SESSION
            );
        }

        Ok(outcome)
    }
}
