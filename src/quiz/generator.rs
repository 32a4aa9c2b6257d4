use std::mem;

use log::debug;

use crate::models::{Difficulty, OperandRange, Operation, Problem, QuizMode};

use super::error::QuizError;
use super::profile::{draw, range_for};
use super::selector::choose;
use super::source::NumberSource;

/// Upper bound on redrawing a zero divisor before giving up on the range.
const MAX_DIVISOR_REDRAWS: usize = 64;

pub fn generate<S: NumberSource + ?Sized>(
    mode: Option<QuizMode>,
    level: Difficulty,
    source: &mut S,
) -> Result<Problem, QuizError> {
    let range = range_for(level, mode)?;
    generate_in(mode, range, source)
}

/// Builds a problem from an explicit operand range. Operands are drawn first
/// and then repaired per operation so that subtraction never goes negative,
/// products stay within `range.max`, and division is always exact.
pub fn generate_in<S: NumberSource + ?Sized>(
    mode: Option<QuizMode>,
    range: OperandRange,
    source: &mut S,
) -> Result<Problem, QuizError> {
    let degenerate = || QuizError::DegenerateRange {
        min: range.min,
        max: range.max,
    };
    if range.is_degenerate() {
        return Err(degenerate());
    }

    let operation = choose(mode, source);
    let mut a = draw(range, source);
    let mut b = draw(range, source);

    match operation {
        Operation::Add => {}
        Operation::Subtract => {
            if a < b {
                mem::swap(&mut a, &mut b);
            }
        }
        Operation::Multiply => {
            let limit = range.max / a.max(1);
            if limit < 1 {
                return Err(degenerate());
            }
            b = source.int_in(1, limit);
        }
        Operation::Divide => {
            let mut redraws = 0;
            while b < 1 {
                redraws += 1;
                if redraws > MAX_DIVISOR_REDRAWS {
                    return Err(degenerate());
                }
                b = draw(range, source);
            }
            let limit = range.max / b;
            if limit < 1 {
                return Err(degenerate());
            }
            let quotient = source.int_in(1, limit);
            a = b * quotient;
        }
    }

    let problem = Problem::new(a, b, operation).ok_or_else(degenerate)?;
    debug!(
        "generated {} = {} from range {}",
        problem,
        problem.correct_answer(),
        range
    );
    Ok(problem)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::quiz::source::testing::ScriptedSource;

    const SAMPLES: usize = 2000;

    fn sweep(mode: Option<QuizMode>, level: Difficulty, seed: u64) -> Vec<Problem> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..SAMPLES)
            .map(|_| generate(mode, level, &mut rng).unwrap())
            .collect()
    }

    fn all_sweeps() -> Vec<(Difficulty, Problem)> {
        let mut out = Vec::new();
        for (seed, mode) in [
            None,
            Some(QuizMode::Standard),
            Some(QuizMode::MultiplyDivide),
            Some(QuizMode::ImpossibleExtras),
        ]
        .into_iter()
        .enumerate()
        {
            for level in Difficulty::ALL {
                if range_for(level, mode).is_err() {
                    continue;
                }
                for problem in sweep(mode, level, seed as u64) {
                    out.push((level, problem));
                }
            }
        }
        out
    }

    #[test]
    fn test_answers_are_exact() {
        for (_, p) in all_sweeps() {
            assert_eq!(
                p.operation().apply(p.operand1(), p.operand2()),
                Some(p.correct_answer()),
                "{}",
                p
            );
        }
    }

    #[test]
    fn test_operands_within_level() {
        for (level, p) in all_sweeps() {
            let range = level.range();
            assert!(range.contains(p.operand1()), "{} at {}", p, level);
            match p.operation() {
                // The multiplier is bounded by the product budget instead.
                Operation::Multiply => {
                    assert!(p.operand2() >= 1);
                    assert!(p.correct_answer() <= range.max, "{} at {}", p, level);
                }
                _ => assert!(range.contains(p.operand2()), "{} at {}", p, level),
            }
        }
    }

    #[test]
    fn test_subtraction_never_negative() {
        for (_, p) in all_sweeps() {
            if p.operation() == Operation::Subtract {
                assert!(p.operand1() >= p.operand2());
                assert!(p.correct_answer() >= 0);
            }
        }
    }

    #[test]
    fn test_division_has_no_remainder() {
        let mut seen = 0;
        for (_, p) in all_sweeps() {
            if p.operation() == Operation::Divide {
                seen += 1;
                assert_ne!(p.operand2(), 0);
                assert_eq!(p.operand1() % p.operand2(), 0);
                assert_eq!(p.operand1() / p.operand2(), p.correct_answer());
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn test_easy_multiply_stays_single_digit() {
        for p in sweep(Some(QuizMode::MultiplyDivide), Difficulty::Easy, 11) {
            if p.operation() == Operation::Multiply {
                assert!((1..=9).contains(&p.operand2()));
                assert!(p.correct_answer() <= 9);
            }
        }
    }

    #[test]
    fn test_scripted_addition() {
        let mut source = ScriptedSource::new(&[0, 4, 6]);
        let p = generate(Some(QuizMode::Standard), Difficulty::Easy, &mut source).unwrap();
        assert_eq!(p.text(), "4 + 6 = ");
        assert_eq!(p.correct_answer(), 10);
    }

    #[test]
    fn test_scripted_subtraction_swaps() {
        let mut source = ScriptedSource::new(&[1, 3, 8]);
        let p = generate(None, Difficulty::Easy, &mut source).unwrap();
        assert_eq!((p.operand1(), p.operand2()), (8, 3));
        assert_eq!(p.correct_answer(), 5);
    }

    #[test]
    fn test_scripted_multiply_redraws_second_operand() {
        // op, a, b (discarded), new b from 1..=99/30
        let mut source = ScriptedSource::new(&[2, 30, 77, 3]);
        let p = generate(Some(QuizMode::MultiplyDivide), Difficulty::Intermediate, &mut source)
            .unwrap();
        assert_eq!(p.text(), "30 * 3 = ");
        assert_eq!(p.correct_answer(), 90);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_scripted_division_builds_dividend() {
        // op, a (discarded), b, quotient from 1..=99/12
        let mut source = ScriptedSource::new(&[3, 50, 12, 7]);
        let p = generate(Some(QuizMode::MultiplyDivide), Difficulty::Intermediate, &mut source)
            .unwrap();
        assert_eq!(p.text(), "84 / 12 = ");
        assert_eq!(p.correct_answer(), 7);
    }

    #[test]
    fn test_division_redraws_zero_divisor() {
        let range = OperandRange::new(0, 9);
        let mut source = ScriptedSource::new(&[3, 5, 0, 0, 3, 2]);
        let p = generate_in(Some(QuizMode::MultiplyDivide), range, &mut source).unwrap();
        assert_eq!(p.text(), "6 / 3 = ");
    }

    #[test]
    fn test_division_gives_up_on_zero_only_range() {
        let range = OperandRange::new(0, 9);
        let mut script = vec![3, 5];
        script.extend(std::iter::repeat(0).take(MAX_DIVISOR_REDRAWS + 1));
        let mut source = ScriptedSource::new(&script);
        let err = generate_in(Some(QuizMode::MultiplyDivide), range, &mut source).unwrap_err();
        assert_eq!(err, QuizError::DegenerateRange { min: 0, max: 9 });
    }

    #[test]
    fn test_degenerate_range_rejected_before_drawing() {
        let mut source = ScriptedSource::default();
        let err = generate_in(None, OperandRange::new(0, 0), &mut source).unwrap_err();
        assert_eq!(err, QuizError::DegenerateRange { min: 0, max: 0 });
    }

    #[test]
    fn test_locked_level_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = generate(Some(QuizMode::Standard), Difficulty::Impossible, &mut rng).unwrap_err();
        assert!(matches!(err, QuizError::InvalidLevel { .. }));
    }
}
