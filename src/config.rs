//! Game configuration
//!
//! Constants that shape a session (attempt limit, feedback colours, success
//! messages) live in one immutable struct that is passed by reference into the
//! session loop and the renderers.

use colored::Color;

/// Maximum number of valid guesses per session
pub const MAX_ATTEMPTS: usize = 6;

/// Colours used to render each verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub exact: Option<Color>,
    pub present: Option<Color>,
    pub absent: Option<Color>,
}

impl Palette {
    /// Bright green / yellow / red, the classic ANSI 92 / 93 / 91 codes
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            exact: Some(Color::BrightGreen),
            present: Some(Color::BrightYellow),
            absent: Some(Color::BrightRed),
        }
    }

    /// No colours at all, for `--no-color` or non-terminal output
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            exact: None,
            present: None,
            absent: None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

/// Closing messages indexed by the attempt on which the word was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessMessages(Vec<&'static str>);

impl SuccessMessages {
    /// The six fixed messages, attempt 1 through 6
    pub const STANDARD: [&'static str; MAX_ATTEMPTS] = [
        "Genius!",
        "Magnificent!",
        "Impressive!",
        "Splendid!",
        "Great!",
        "Phew!",
    ];

    /// Build a custom table; entry `n - 1` is shown for a win on attempt `n`
    #[must_use]
    pub fn new(messages: Vec<&'static str>) -> Self {
        Self(messages)
    }

    /// Message for a win on `attempt` (1-based)
    ///
    /// # Examples
    /// ```
    /// use wordle_game::config::SuccessMessages;
    ///
    /// let messages = SuccessMessages::default();
    /// assert_eq!(messages.message_for(1), Some("Genius!"));
    /// assert_eq!(messages.message_for(4), Some("Splendid!"));
    /// assert_eq!(messages.message_for(7), None);
    /// ```
    #[must_use]
    pub fn message_for(&self, attempt: usize) -> Option<&'static str> {
        attempt
            .checked_sub(1)
            .and_then(|index| self.0.get(index))
            .copied()
    }
}

impl Default for SuccessMessages {
    fn default() -> Self {
        Self(Self::STANDARD.to_vec())
    }
}

/// Immutable settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub palette: Palette,
    pub messages: SuccessMessages,
}

impl GameConfig {
    /// Default settings with a different palette
    #[must_use]
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            palette: Palette::default(),
            messages: SuccessMessages::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_constants() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.palette, Palette::classic());
    }

    #[test]
    fn every_attempt_has_a_message() {
        let messages = SuccessMessages::default();
        let expected = [
            (1, "Genius!"),
            (2, "Magnificent!"),
            (3, "Impressive!"),
            (4, "Splendid!"),
            (5, "Great!"),
            (6, "Phew!"),
        ];
        for (attempt, text) in expected {
            assert_eq!(messages.message_for(attempt), Some(text));
        }
    }

    #[test]
    fn out_of_range_attempts_have_no_message() {
        let messages = SuccessMessages::default();
        assert_eq!(messages.message_for(0), None);
        assert_eq!(messages.message_for(7), None);
    }

    #[test]
    fn custom_table_extends_cleanly() {
        let messages = SuccessMessages::new(vec!["Lucky!", "Nice!"]);
        assert_eq!(messages.message_for(2), Some("Nice!"));
        assert_eq!(messages.message_for(3), None);
    }

    #[test]
    fn plain_palette_has_no_colours() {
        let config = GameConfig::with_palette(Palette::plain());
        assert!(config.palette.exact.is_none());
        assert_eq!(config.max_attempts, MAX_ATTEMPTS);
    }
}
