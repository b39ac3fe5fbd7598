//! Game session
//!
//! A session draws guesses from a [`GuessSource`], evaluates them against the
//! hidden word, and reports feedback to a [`FeedbackSink`] until the word is
//! found or the attempts run out.

mod runner;
mod state;

pub use runner::run_session;
pub use state::{GuessError, Session, SessionState};

use crate::core::{EvaluationResult, Word, WordError};
use std::io;

/// Supplier of raw guess text, one line per call
pub trait GuessSource {
    /// Request a guess for `attempt`
    ///
    /// Returns `Ok(None)` once no more input will ever arrive.
    ///
    /// # Errors
    /// Returns an I/O error if the underlying input cannot be read.
    fn next_guess(&mut self, attempt: usize) -> io::Result<Option<String>>;
}

/// Receiver of everything the player should see during a session
pub trait FeedbackSink {
    /// A new attempt begins
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    fn attempt_started(&mut self, attempt: usize) -> io::Result<()>;

    /// Input was rejected; the same attempt will be asked for again
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    fn invalid_guess(&mut self, input: &str, error: &WordError) -> io::Result<()>;

    /// A valid guess was evaluated
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    fn evaluation(&mut self, attempt: usize, result: &EvaluationResult) -> io::Result<()>;

    /// The hidden word was found on `attempts`
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    fn won(
        &mut self,
        attempts: usize,
        message: Option<&'static str>,
        history: &[EvaluationResult],
    ) -> io::Result<()>;

    /// Every attempt was used without finding `hidden`
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    fn lost(&mut self, hidden: &Word) -> io::Result<()>;
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Guessed on attempt `attempts`
    Won { attempts: usize },
    /// All attempts used without finding `hidden`
    Lost { hidden: Word },
    /// Input ran out mid-session
    Abandoned { attempts_used: usize },
}

impl SessionOutcome {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}
