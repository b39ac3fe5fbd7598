//! Terminal output formatting
//!
//! Coloured feedback rendering plus the line-oriented guess source and the
//! terminal feedback sink used by the `play` command.

pub mod display;
pub mod formatters;

pub use display::{LineGuessSource, TerminalSink, print_candidates, print_check_result};
pub use formatters::render_evaluation;
