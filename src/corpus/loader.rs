//! Corpus loading utilities
//!
//! Reads free text from a file so any document can stand in for the embedded
//! lyrics.

use std::fs;
use std::io;
use std::path::Path;

/// Load corpus text from a file
///
/// The text is returned as-is; candidate extraction happens in
/// [`Corpus::from_text`](super::Corpus::from_text).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use wordle_game::corpus::loader::load_from_file;
///
/// let text = load_from_file("data/sound_of_silence.txt").unwrap();
/// println!("Loaded {} bytes", text.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{CandidatePolicy, Corpus, PunctuationMode, SOURCE};

    #[test]
    fn bundled_data_file_matches_embedded_source() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sound_of_silence.txt");
        let text = load_from_file(path).unwrap();
        assert_eq!(text, SOURCE);
    }

    #[test]
    fn loaded_text_builds_a_corpus() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sound_of_silence.txt");
        let text = load_from_file(path).unwrap();
        let corpus =
            Corpus::from_text(&text, PunctuationMode::Delete, CandidatePolicy::NonEmpty).unwrap();
        assert!(!corpus.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_from_file("definitely/not/a/real/corpus.txt");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
