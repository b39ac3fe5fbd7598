//! Single guess evaluation
//!
//! Evaluates one guess against a given hidden word without running a session.

use crate::core::{EvaluationResult, Word, WordError, evaluate};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub hidden: Word,
    pub guess: Word,
    pub result: EvaluationResult,
}

/// Validate both words and evaluate `guess` against `hidden`
///
/// # Errors
///
/// Returns a `WordError` if either word is not exactly 5 letters A-Z.
pub fn check_guess(hidden: &str, guess: &str) -> Result<CheckResult, WordError> {
    let hidden = Word::new(hidden)?;
    let guess = Word::new(guess)?;
    let result = evaluate(&hidden, &guess);

    Ok(CheckResult {
        hidden,
        guess,
        result,
    })
}
