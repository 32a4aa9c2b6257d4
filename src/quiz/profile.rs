use crate::models::mode::enables;
use crate::models::{Difficulty, OperandRange, QuizMode};

use super::error::QuizError;
use super::source::NumberSource;

/// Operand range for `level`, refusing levels the mode does not unlock.
pub fn range_for(level: Difficulty, mode: Option<QuizMode>) -> Result<OperandRange, QuizError> {
    if !enables(mode, level) {
        return Err(QuizError::InvalidLevel { level, mode });
    }
    Ok(level.range())
}

/// Levels a player can pick under `mode`, easiest first.
pub fn available_difficulties(mode: Option<QuizMode>) -> Vec<Difficulty> {
    Difficulty::ALL
        .into_iter()
        .filter(|level| enables(mode, *level))
        .collect()
}

pub fn sample<S: NumberSource + ?Sized>(level: Difficulty, source: &mut S) -> i64 {
    draw(level.range(), source)
}

pub(crate) fn draw<S: NumberSource + ?Sized>(range: OperandRange, source: &mut S) -> i64 {
    source.int_in(range.min, range.max)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_range_for_enabled_levels() {
        assert_eq!(
            range_for(Difficulty::Hard, Some(QuizMode::Standard)),
            Ok(OperandRange::new(1000, 9999))
        );
        assert_eq!(
            range_for(Difficulty::Impossible, Some(QuizMode::ImpossibleExtras)),
            Ok(OperandRange::new(10000, 99999))
        );
    }

    #[test]
    fn test_range_for_rejects_locked_level() {
        let err = range_for(Difficulty::Impossible, Some(QuizMode::MultiplyDivide)).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidLevel {
                level: Difficulty::Impossible,
                mode: Some(QuizMode::MultiplyDivide),
            }
        );
        assert!(range_for(Difficulty::Impossible, None).is_err());
    }

    #[test]
    fn test_available_difficulties() {
        assert_eq!(
            available_difficulties(Some(QuizMode::Standard)),
            vec![Difficulty::Easy, Difficulty::Intermediate, Difficulty::Hard]
        );
        assert_eq!(available_difficulties(None).len(), 3);
        assert_eq!(
            available_difficulties(Some(QuizMode::ImpossibleExtras)).last(),
            Some(&Difficulty::Impossible)
        );
    }

    #[test]
    fn test_sample_within_level() {
        let mut rng = StdRng::seed_from_u64(1);
        for level in Difficulty::ALL {
            let range = level.range();
            let mut seen_min = false;
            let mut seen_max = false;
            for _ in 0..5000 {
                let v = sample(level, &mut rng);
                assert!(range.contains(v), "{} outside {} for {}", v, range, level);
                seen_min |= v == range.min;
                seen_max |= v == range.max;
            }
            if level == Difficulty::Easy {
                assert!(seen_min && seen_max, "easy bounds never drawn");
            }
        }
    }
}
