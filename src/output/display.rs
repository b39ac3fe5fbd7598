//! Terminal input and output for a session

use super::formatters::{render_evaluation, render_legend};
use crate::config::Palette;
use crate::core::{EvaluationResult, WORD_LENGTH, Word, WordError};
use crate::session::{FeedbackSink, GuessSource};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Reads one guess per line, printing a prompt before each read
pub struct LineGuessSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineGuessSource<R, W> {
    pub const fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl LineGuessSource<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout and read from stdin
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> GuessSource for LineGuessSource<R, W> {
    fn next_guess(&mut self, _attempt: usize) -> io::Result<Option<String>> {
        write!(
            self.prompt_out,
            "Please enter your {WORD_LENGTH}-letter guess: "
        )?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        // Only the line terminator is dropped; stray spaces make the guess invalid
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}

/// Prints session feedback to a terminal (or any writer)
pub struct TerminalSink<W> {
    out: W,
    palette: Palette,
}

impl<W: Write> TerminalSink<W> {
    pub const fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    /// Reveal the hidden word after a lost session
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn reveal(&mut self, hidden: &Word) -> io::Result<()> {
        writeln!(self.out, "The correct answer is {hidden}")
    }

    /// Consume the sink, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    const fn is_plain(&self) -> bool {
        self.palette.exact.is_none() && self.palette.present.is_none() && self.palette.absent.is_none()
    }
}

impl TerminalSink<io::Stdout> {
    #[must_use]
    pub fn stdout(palette: Palette) -> Self {
        Self::new(io::stdout(), palette)
    }
}

impl<W: Write> FeedbackSink for TerminalSink<W> {
    fn attempt_started(&mut self, attempt: usize) -> io::Result<()> {
        writeln!(self.out, "Attempt {attempt}")
    }

    fn invalid_guess(&mut self, _input: &str, _error: &WordError) -> io::Result<()> {
        // Re-prompting is the only feedback for malformed input
        Ok(())
    }

    fn evaluation(&mut self, _attempt: usize, result: &EvaluationResult) -> io::Result<()> {
        writeln!(self.out, "{}", render_evaluation(result, &self.palette))?;
        if self.is_plain() {
            writeln!(self.out, "{}", render_legend(result))?;
        }
        Ok(())
    }

    fn won(
        &mut self,
        _attempts: usize,
        message: Option<&'static str>,
        history: &[EvaluationResult],
    ) -> io::Result<()> {
        if let Some(message) = message {
            if self.is_plain() {
                writeln!(self.out, "{message}")?;
            } else {
                writeln!(self.out, "{}", message.bright_green().bold())?;
            }
        }

        writeln!(self.out)?;
        for result in history {
            writeln!(self.out, "{}", result.to_emoji())?;
        }
        Ok(())
    }

    fn lost(&mut self, hidden: &Word) -> io::Result<()> {
        self.reveal(hidden)
    }
}

/// Print the result of evaluating a single guess
pub fn print_check_result(guess: &Word, result: &EvaluationResult, palette: &Palette) {
    println!("{}  {}", render_evaluation(result, palette), result.to_emoji());
    println!("{}", render_legend(result));
    if result.is_perfect() {
        println!("{} is the hidden word", guess.text().green().bold());
    } else {
        println!(
            "{} exact, {} present",
            result.count_exact(),
            result.count_present()
        );
    }
}

/// Print the candidate words of a corpus
pub fn print_candidates(candidates: &[Word]) {
    println!(
        "{}",
        format!("{} candidate words", candidates.len()).bright_cyan().bold()
    );
    for chunk in candidates.chunks(8) {
        let line: Vec<&str> = chunk.iter().map(Word::text).collect();
        println!("  {}", line.join(" "));
    }
}
