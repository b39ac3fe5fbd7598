//! Wordle Game
//!
//! A terminal Wordle that hides a 5-letter word drawn from a text corpus and
//! gives coloured per-letter feedback on up to six guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterVerdict, Word, evaluate};
//!
//! let hidden = Word::new("abcde").unwrap();
//! let guess = Word::new("aedcb").unwrap();
//!
//! let result = evaluate(&hidden, &guess);
//! assert_eq!(result.verdicts()[0], LetterVerdict::Exact);
//! assert_eq!(result.count_present(), 4);
//! ```

// Core domain types
pub mod core;

// Game settings
pub mod config;

// Hidden word sources
pub mod corpus;

// Attempt loop and its I/O seams
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
