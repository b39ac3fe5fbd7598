//! Session state machine
//!
//! Owns the hidden word and the attempt counter for one game and applies each
//! submitted guess. Input and output are handled by the runner.

use crate::config::GameConfig;
use crate::core::{EvaluationResult, Word, WordError, evaluate};
use thiserror::Error;
use tracing::trace;

/// Phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a well-formed guess for the current attempt
    AwaitingGuess,
    /// A validated guess is being compared against the hidden word
    Evaluating,
    /// The hidden word was guessed (terminal)
    Won,
    /// Every attempt was used without a match (terminal)
    Lost,
}

impl SessionState {
    /// Check if no further guesses are accepted
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A submitted guess that could not be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Not exactly 5 letters A-Z; the attempt is not consumed
    #[error("invalid guess format: {0}")]
    InvalidGuessFormat(#[from] WordError),
    #[error("the session is already over")]
    SessionOver,
}

/// One game against a fixed hidden word
#[derive(Debug, Clone)]
pub struct Session<'a> {
    hidden: Word,
    config: &'a GameConfig,
    attempt: usize,
    state: SessionState,
    history: Vec<EvaluationResult>,
}

impl<'a> Session<'a> {
    /// Start a session on attempt 1
    #[must_use]
    pub fn new(hidden: Word, config: &'a GameConfig) -> Self {
        Self {
            hidden,
            config,
            attempt: 1,
            state: SessionState::AwaitingGuess,
            history: Vec::with_capacity(config.max_attempts),
        }
    }

    /// The word being guessed
    #[must_use]
    pub const fn hidden(&self) -> &Word {
        &self.hidden
    }

    /// Current attempt number (1-based)
    ///
    /// After a win this is the winning attempt; after a loss it is the last one.
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Evaluations of every accepted guess, oldest first
    #[must_use]
    pub fn history(&self) -> &[EvaluationResult] {
        &self.history
    }

    /// Submit raw player input for the current attempt
    ///
    /// Input is case-insensitive. Malformed input leaves the session untouched.
    ///
    /// # Errors
    /// Returns `GuessError::InvalidGuessFormat` for input that is not exactly 5
    /// ASCII letters, or `GuessError::SessionOver` once the session has ended.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::config::GameConfig;
    /// use wordle_game::core::Word;
    /// use wordle_game::session::{Session, SessionState};
    ///
    /// let config = GameConfig::default();
    /// let mut session = Session::new(Word::new("SOUND").unwrap(), &config);
    ///
    /// assert!(session.submit("12AB3").is_err());
    /// assert_eq!(session.attempt(), 1);
    ///
    /// let result = session.submit("sound").unwrap();
    /// assert!(result.is_perfect());
    /// assert_eq!(session.state(), SessionState::Won);
    /// ```
    pub fn submit(&mut self, input: &str) -> Result<EvaluationResult, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::SessionOver);
        }

        let guess = Word::new(input)?;
        self.transition(SessionState::Evaluating);

        let result = evaluate(&self.hidden, &guess);
        self.history.push(result.clone());

        if guess == self.hidden {
            self.transition(SessionState::Won);
        } else if self.attempt >= self.config.max_attempts {
            self.transition(SessionState::Lost);
        } else {
            self.attempt += 1;
            self.transition(SessionState::AwaitingGuess);
        }

        Ok(result)
    }

    fn transition(&mut self, next: SessionState) {
        trace!(from = ?self.state, to = ?next, attempt = self.attempt, "session transition");
        self.state = next;
    }
}
