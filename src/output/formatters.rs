//! Formatting utilities for terminal output

use crate::config::Palette;
use crate::core::{EvaluationResult, LetterVerdict};
use colored::{Color, Colorize};

/// Colour for a verdict under `palette`, if any
#[must_use]
pub const fn verdict_color(verdict: LetterVerdict, palette: &Palette) -> Option<Color> {
    match verdict {
        LetterVerdict::Exact => palette.exact,
        LetterVerdict::Present => palette.present,
        LetterVerdict::Absent => palette.absent,
    }
}

/// Render a guess as its five uppercase letters, each coloured by verdict
///
/// With a plain palette the letters are returned uncoloured.
#[must_use]
pub fn render_evaluation(result: &EvaluationResult, palette: &Palette) -> String {
    result
        .iter()
        .map(|(letter, verdict)| match verdict_color(verdict, palette) {
            Some(color) => letter.to_string().as_str().color(color).bold().to_string(),
            None => letter.to_string(),
        })
        .collect()
}

/// Render a guess with a one-letter verdict code under each letter
///
/// Used where colour is unavailable: `=` exact, `~` present, `.` absent.
#[must_use]
pub fn render_legend(result: &EvaluationResult) -> String {
    result
        .verdicts()
        .iter()
        .map(|verdict| match verdict {
            LetterVerdict::Exact => '=',
            LetterVerdict::Present => '~',
            LetterVerdict::Absent => '.',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn result(hidden: &str, guess: &str) -> EvaluationResult {
        evaluate(&Word::new(hidden).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn plain_palette_renders_bare_letters() {
        let rendered = render_evaluation(&result("SOUND", "donut"), &Palette::plain());
        assert_eq!(rendered, "DONUT");
    }

    #[test]
    fn coloured_palette_keeps_letters_in_order() {
        let rendered = render_evaluation(&result("ERROR", "ARROW"), &Palette::classic());
        let letters: String = rendered.chars().filter(char::is_ascii_uppercase).collect();
        assert_eq!(letters, "ARROW");
    }

    #[test]
    fn verdict_colors_follow_palette() {
        let palette = Palette::classic();
        assert_eq!(
            verdict_color(LetterVerdict::Exact, &palette),
            Some(Color::BrightGreen)
        );
        assert_eq!(
            verdict_color(LetterVerdict::Present, &palette),
            Some(Color::BrightYellow)
        );
        assert_eq!(
            verdict_color(LetterVerdict::Absent, &palette),
            Some(Color::BrightRed)
        );
        assert_eq!(verdict_color(LetterVerdict::Exact, &Palette::plain()), None);
    }

    #[test]
    fn legend_marks_each_verdict() {
        assert_eq!(render_legend(&result("ABCDE", "AEDCB")), "=~~~~");
        assert_eq!(render_legend(&result("ERROR", "ARROW")), ".===.");
    }
}
