//! Corpus of candidate hidden words
//!
//! Provides the embedded source text, candidate extraction, and hidden-word
//! selection for any text.

mod embedded;
pub mod loader;
mod selector;

pub use embedded::{SOURCE, SOURCE_CANDIDATES};
pub use selector::{
    CandidatePolicy, Corpus, CorpusError, PunctuationMode, clean_text, extract_candidates,
    select_hidden_word,
};
