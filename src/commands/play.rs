//! Interactive game
//!
//! Draws the hidden word, plays one session on the terminal, and reveals the
//! word if the player runs out of attempts.

use super::candidates::{CorpusSource, load_corpus};
use crate::config::GameConfig;
use crate::core::Word;
use crate::corpus::PunctuationMode;
use crate::output::{LineGuessSource, TerminalSink};
use crate::session::{GuessSource, SessionOutcome, run_session};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tracing::{debug, info};

/// Options for starting a game
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    pub corpus: CorpusSource,
    pub punctuation: PunctuationMode,
    /// Seed for reproducible word selection
    pub seed: Option<u64>,
    /// Play against this word instead of drawing one
    pub word: Option<String>,
}

/// Pick the hidden word for a game
///
/// # Errors
///
/// Returns an error if a fixed word is malformed or the corpus is unusable.
pub fn choose_hidden_word(config: &PlayConfig) -> Result<Word> {
    if let Some(word) = &config.word {
        return Word::new(word).with_context(|| format!("invalid hidden word '{word}'"));
    }

    let corpus = load_corpus(&config.corpus, config.punctuation)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let hidden = corpus.choose(&mut rng)?;
    debug!(seed = ?config.seed, "hidden word selected");
    Ok(hidden)
}

/// Run one session against `hidden`
///
/// On a loss `sink` reveals the hidden word.
///
/// # Errors
///
/// Returns an error if reading guesses or writing feedback fails.
pub fn play_session<G, W>(
    hidden: Word,
    game: &GameConfig,
    input: &mut G,
    sink: &mut TerminalSink<W>,
) -> Result<SessionOutcome>
where
    G: GuessSource + ?Sized,
    W: Write,
{
    let outcome = run_session(hidden, game, input, sink).context("session I/O failed")?;
    info!(won = outcome.is_win(), "game finished");
    Ok(outcome)
}

/// Play a full game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the hidden word cannot be chosen or terminal I/O fails.
pub fn run_play(config: &PlayConfig, game: &GameConfig) -> Result<SessionOutcome> {
    let hidden = choose_hidden_word(config)?;

    let mut input = LineGuessSource::stdio();
    let mut sink = TerminalSink::stdout(game.palette);
    play_session(hidden, game, &mut input, &mut sink)
}
