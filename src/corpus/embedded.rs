//! Embedded corpus
//!
//! Text compiled into the binary so the game runs without any input files.

/// Lyrics of "The Sound of Silence", the default source of hidden words
pub const SOURCE: &str = include_str!("../../data/sound_of_silence.txt");

/// Number of eligible 5-letter candidates (with repeats) in [`SOURCE`]
pub const SOURCE_CANDIDATES: usize = 35;
