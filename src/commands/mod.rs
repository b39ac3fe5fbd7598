//! Command implementations

pub mod candidates;
pub mod check;
pub mod play;

pub use candidates::{CorpusSource, load_corpus};
pub use check::{CheckResult, check_guess};
pub use play::{PlayConfig, choose_hidden_word, play_session, run_play};
