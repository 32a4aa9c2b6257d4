use std::fmt;

use serde::{Deserialize, Serialize};

use super::operation::Operation;

/// One generated question. Fields are private so a `Problem` can only be
/// built through [`Problem::new`], which checks the answer is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    operand1: i64,
    operand2: i64,
    operation: Operation,
    correct_answer: i64,
}

impl Problem {
    pub fn new(operand1: i64, operand2: i64, operation: Operation) -> Option<Self> {
        let correct_answer = operation.apply(operand1, operand2)?;
        Some(Self {
            operand1,
            operand2,
            operation,
            correct_answer,
        })
    }

    pub fn operand1(&self) -> i64 {
        self.operand1
    }

    pub fn operand2(&self) -> i64 {
        self.operand2
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn correct_answer(&self) -> i64 {
        self.correct_answer
    }

    /// Prompt text, e.g. `"4 + 6 = "`.
    pub fn text(&self) -> String {
        format!(
            "{} {} {} = ",
            self.operand1,
            self.operation.symbol(),
            self.operand2
        )
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.operand1,
            self.operation.symbol(),
            self.operand2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_format() {
        let problem = Problem::new(4, 6, Operation::Add).unwrap();
        assert_eq!(problem.text(), "4 + 6 = ");
        assert_eq!(problem.correct_answer(), 10);

        let problem = Problem::new(84, 12, Operation::Divide).unwrap();
        assert_eq!(problem.text(), "84 / 12 = ");
        assert_eq!(problem.correct_answer(), 7);
    }

    #[test]
    fn test_rejects_invalid_problems() {
        assert!(Problem::new(3, 8, Operation::Subtract).is_none());
        assert!(Problem::new(10, 3, Operation::Divide).is_none());
        assert!(Problem::new(10, 0, Operation::Divide).is_none());
    }
}
