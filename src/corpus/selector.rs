//! Hidden word selection
//!
//! Turns free text into a list of eligible candidates and draws the hidden word
//! from it. A candidate is a whitespace-separated token of exactly 5 ASCII
//! letters once punctuation has been stripped.

use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::debug;

/// How punctuation is removed before splitting text into tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PunctuationMode {
    /// Delete punctuation outright. "words,songs" fuses into one token.
    Delete,
    /// Replace punctuation with a space. "words,songs" stays two tokens.
    #[default]
    Whitespace,
}

/// Check applied to the extracted candidates before a word is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidatePolicy {
    /// A known, fixed corpus must yield exactly this many candidates
    ExactCount(usize),
    /// An arbitrary corpus only has to yield at least one candidate
    NonEmpty,
}

impl CandidatePolicy {
    /// Validate a candidate count against this policy
    ///
    /// # Errors
    /// Returns `CorpusError::UnexpectedCount` when an exact count is not met,
    /// or `CorpusError::Empty` when there are no candidates at all.
    pub fn validate(self, found: usize) -> Result<(), CorpusError> {
        match self {
            Self::ExactCount(expected) if found != expected => {
                Err(CorpusError::UnexpectedCount { expected, found })
            }
            _ if found == 0 => Err(CorpusError::Empty),
            _ => Ok(()),
        }
    }
}

/// The corpus cannot supply a hidden word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    #[error("corpus yielded {found} candidate words, expected {expected}")]
    UnexpectedCount { expected: usize, found: usize },
    #[error("corpus contains no 5-letter words")]
    Empty,
}

/// Remove ASCII punctuation from `text`
///
/// # Examples
/// ```
/// use wordle_game::corpus::{PunctuationMode, clean_text};
///
/// assert_eq!(clean_text("words,songs", PunctuationMode::Delete), "wordssongs");
/// assert_eq!(clean_text("words,songs", PunctuationMode::Whitespace), "words songs");
/// ```
#[must_use]
pub fn clean_text(text: &str, mode: PunctuationMode) -> String {
    match mode {
        PunctuationMode::Delete => text
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect(),
        PunctuationMode::Whitespace => text
            .chars()
            .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
            .collect(),
    }
}

/// Extract eligible candidate words from `text`, in order of appearance
///
/// Repeated words are kept, so a word that occurs often is drawn more often.
#[must_use]
pub fn extract_candidates(text: &str, mode: PunctuationMode) -> Vec<String> {
    clean_text(text, mode)
        .split_whitespace()
        .filter(|token| token.chars().count() == WORD_LENGTH)
        .filter(|token| token.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_string)
        .collect()
}

/// Validated set of candidate hidden words
#[derive(Debug, Clone)]
pub struct Corpus {
    candidates: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from free text and check it against `policy`
    ///
    /// # Errors
    /// Returns `CorpusError` if the candidates do not satisfy `policy`.
    pub fn from_text(
        text: &str,
        mode: PunctuationMode,
        policy: CandidatePolicy,
    ) -> Result<Self, CorpusError> {
        let candidates: Vec<Word> = extract_candidates(text, mode)
            .iter()
            .filter_map(|token| Word::new(token).ok())
            .collect();

        debug!(
            candidates = candidates.len(),
            ?mode,
            ?policy,
            "extracted corpus candidates"
        );
        policy.validate(candidates.len())?;

        Ok(Self { candidates })
    }

    /// All candidates, uppercase, in order of appearance
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of candidates, counting repeats
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false for a validated corpus
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Draw a candidate uniformly at random
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if there is nothing to draw from.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, CorpusError> {
        self.candidates
            .choose(rng)
            .cloned()
            .ok_or(CorpusError::Empty)
    }
}

/// Pick the hidden word for a session from `text`
///
/// # Errors
/// Returns `CorpusError` if the extracted candidates do not satisfy `policy`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::corpus::{CandidatePolicy, PunctuationMode, select_hidden_word};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let text = "Hello darkness, my old friend";
/// let word = select_hidden_word(text, PunctuationMode::Whitespace, CandidatePolicy::NonEmpty, &mut rng).unwrap();
/// assert_eq!(word.text(), "HELLO");
/// ```
pub fn select_hidden_word<R: Rng + ?Sized>(
    text: &str,
    mode: PunctuationMode,
    policy: CandidatePolicy,
    rng: &mut R,
) -> Result<Word, CorpusError> {
    Corpus::from_text(text, mode, policy)?.choose(rng)
}
