//! Guess evaluation against the hidden word
//!
//! Each guessed letter receives one verdict:
//! - Exact (green): same letter at the same position
//! - Present (yellow): letter occurs elsewhere in the hidden word
//! - Absent (red): letter does not occur, or every occurrence is already credited
//!
//! Duplicate letters are resolved in two passes. Exact matches consume their
//! hidden letters first; the remaining guess positions are then scanned left to
//! right against a tally of unconsumed hidden letters, so excess trailing copies
//! of a letter come out Absent.

use super::word::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    /// Correct letter in correct position
    Exact,
    /// Letter is in the hidden word at another position
    Present,
    /// Letter is not in the hidden word (or all its occurrences are used up)
    Absent,
}

impl LetterVerdict {
    /// Emoji square for this verdict
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '🟥',
        }
    }
}

/// Per-position verdicts for one guess, aligned 1:1 with the guess letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluationResult {
    letters: [u8; WORD_LENGTH],
    verdicts: [LetterVerdict; WORD_LENGTH],
}

impl EvaluationResult {
    /// Guessed letters in position order (uppercase ASCII)
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.verdicts
    }

    /// Iterate over `(letter, verdict)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterVerdict)> + '_ {
        self.letters
            .iter()
            .zip(self.verdicts.iter())
            .map(|(&letter, &verdict)| (char::from(letter), verdict))
    }

    /// Check if every letter is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.verdicts.iter().all(|&v| v == LetterVerdict::Exact)
    }

    /// Number of exact matches
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(LetterVerdict::Exact)
    }

    /// Number of present-but-misplaced letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterVerdict::Present)
    }

    fn count(&self, verdict: LetterVerdict) -> usize {
        self.verdicts.iter().filter(|&&v| v == verdict).count()
    }

    /// Emoji strip such as "🟩🟨🟥🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.to_emoji()).collect()
    }
}

/// Evaluate `guess` against `hidden`
///
/// Pure and infallible: both words are already validated.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterVerdict, Word, evaluate};
///
/// let hidden = Word::new("ERROR").unwrap();
/// let guess = Word::new("ARROW").unwrap();
/// let result = evaluate(&hidden, &guess);
///
/// use LetterVerdict::{Absent, Exact};
/// assert_eq!(result.verdicts(), &[Absent, Exact, Exact, Exact, Absent]);
/// ```
#[must_use]
pub fn evaluate(hidden: &Word, guess: &Word) -> EvaluationResult {
    let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
    let mut hidden_available = hidden.char_counts();

    // First pass: exact matches consume their hidden letter
    // Allow: Index needed to compare guess[i] with hidden[i] and set verdicts[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.char_at(i) == hidden.char_at(i) {
            verdicts[i] = LetterVerdict::Exact;

            if let Some(count) = hidden_available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: left to right over the rest against the remaining tally
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if verdicts[i] == LetterVerdict::Exact {
            continue;
        }

        if let Some(count) = hidden_available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            verdicts[i] = LetterVerdict::Present;
            *count -= 1;
        }
    }

    EvaluationResult {
        letters: *guess.chars(),
        verdicts,
    }
}

#[cfg(test)]
mod tests {
    use super::LetterVerdict::{Absent, Exact, Present};
    use super::*;

    fn eval(hidden: &str, guess: &str) -> EvaluationResult {
        evaluate(&Word::new(hidden).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn identical_words_are_all_exact() {
        let result = eval("SOUND", "sound");
        assert_eq!(result.verdicts(), &[Exact; 5]);
        assert!(result.is_perfect());
        assert_eq!(result.count_exact(), 5);
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        let result = eval("SOUND", "LIGHT");
        assert_eq!(result.verdicts(), &[Absent; 5]);
        assert!(!result.is_perfect());
    }

    #[test]
    fn permutation_without_repeats() {
        let result = eval("ABCDE", "AEDCB");
        assert_eq!(result.verdicts(), &[Exact, Present, Present, Present, Present]);
        assert_eq!(result.count_exact(), 1);
        assert_eq!(result.count_present(), 4);
    }

    #[test]
    fn duplicate_letters_exact_consumes_before_present() {
        // ERROR's three R's: two matched exactly, the third is still available
        // but ARROW has no further R, and W is not in ERROR at all
        let result = eval("ERROR", "ARROW");
        assert_eq!(result.verdicts(), &[Absent, Exact, Exact, Exact, Absent]);
    }

    #[test]
    fn sound_against_donut() {
        // D, O, N, U present elsewhere; T absent
        let result = eval("SOUND", "DONUT");
        assert_eq!(result.verdicts(), &[Present, Exact, Present, Present, Absent]);
    }

    #[test]
    fn excess_guess_letters_leftmost_wins() {
        // Hidden has one E, guess has three: only the leftmost is credited
        let result = eval("BOWED", "EERIE");
        assert_eq!(result.verdicts(), &[Present, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_present() {
        // SPEED vs CREPE: E at index 2 is exact, E at index 3 is present
        let result = eval("CREPE", "SPEED");
        assert_eq!(result.verdicts(), &[Absent, Present, Exact, Present, Absent]);

        // A later exact match steals the only copy from an earlier misplaced one
        let result = eval("HALLS", "SSSSS");
        assert_eq!(result.verdicts(), &[Absent, Absent, Absent, Absent, Exact]);
    }

    #[test]
    fn letters_are_position_aligned_with_guess() {
        let result = eval("WELLS", "walls");
        assert_eq!(result.letters(), b"WALLS");
        let pairs: Vec<(char, LetterVerdict)> = result.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ('W', Exact),
                ('A', Absent),
                ('L', Exact),
                ('L', Exact),
                ('S', Exact)
            ]
        );
    }

    #[test]
    fn exactness_iff_same_letter_same_position() {
        let corpus = ["SOUND", "WORDS", "WELLS", "HALLS", "NEVER", "DARED", "MIGHT"];
        for hidden in corpus {
            for guess in corpus {
                let result = eval(hidden, guess);
                for i in 0..WORD_LENGTH {
                    let same = hidden.as_bytes()[i] == guess.as_bytes()[i];
                    assert_eq!(result.verdicts()[i] == Exact, same, "{hidden} vs {guess} @ {i}");
                }
            }
        }
    }

    #[test]
    fn credited_letters_never_exceed_hidden_count() {
        let corpus = ["ERROR", "ARROW", "SPEED", "EERIE", "LLAMA", "WALLS", "SOUND"];
        for hidden in corpus {
            for guess in corpus {
                let result = eval(hidden, guess);
                for letter in b'A'..=b'Z' {
                    let credited = result
                        .letters()
                        .iter()
                        .zip(result.verdicts())
                        .filter(|&(&l, &v)| l == letter && v != Absent)
                        .count();
                    let available = hidden.bytes().filter(|&b| b == letter).count();
                    assert!(credited <= available, "{hidden} vs {guess}: {}", letter as char);
                }
            }
        }
    }

    #[test]
    fn emoji_strip() {
        assert_eq!(eval("ABCDE", "AEDCB").to_emoji(), "🟩🟨🟨🟨🟨");
        assert_eq!(eval("SOUND", "LIGHT").to_emoji(), "🟥🟥🟥🟥🟥");
    }
}
