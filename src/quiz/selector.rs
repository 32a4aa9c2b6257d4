use crate::models::mode::default_operations;
use crate::models::{Operation, QuizMode};

use super::source::NumberSource;

pub fn operations_for(mode: Option<QuizMode>) -> &'static [Operation] {
    match mode {
        Some(mode) => mode.operations(),
        None => default_operations(),
    }
}

/// Uniform pick from the mode's operation set.
pub fn choose<S: NumberSource + ?Sized>(mode: Option<QuizMode>, source: &mut S) -> Operation {
    let operations = operations_for(mode);
    let last = operations.len() as i64 - 1;
    let index = source.int_in(0, last).clamp(0, last) as usize;
    operations[index]
}
