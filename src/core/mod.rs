//! Core domain types for Wordle
//!
//! Words, per-letter verdicts, and the guess evaluator. Everything here is pure
//! and independent of I/O.

mod evaluation;
mod word;

pub use evaluation::{EvaluationResult, LetterVerdict, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
