//! Corpus loading and candidate listing

use crate::corpus::{
    CandidatePolicy, Corpus, PunctuationMode, SOURCE, SOURCE_CANDIDATES, loader::load_from_file,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Where the hidden word is drawn from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorpusSource {
    /// The lyrics compiled into the binary
    #[default]
    Embedded,
    /// Any text file supplied by the player
    File(PathBuf),
}

impl CorpusSource {
    /// Validation policy for this source
    ///
    /// The embedded text is fixed, so its candidate count is pinned as a
    /// regression guard. User text only has to contain some candidate.
    #[must_use]
    pub const fn policy(&self) -> CandidatePolicy {
        match self {
            Self::Embedded => CandidatePolicy::ExactCount(SOURCE_CANDIDATES),
            Self::File(_) => CandidatePolicy::NonEmpty,
        }
    }
}

/// Read and validate the corpus for `source`
///
/// # Errors
///
/// Returns an error if the corpus file cannot be read or yields no valid
/// candidates under the source's policy.
pub fn load_corpus(source: &CorpusSource, mode: PunctuationMode) -> Result<Corpus> {
    let corpus = match source {
        CorpusSource::Embedded => Corpus::from_text(SOURCE, mode, source.policy())
            .context("embedded corpus failed validation")?,
        CorpusSource::File(path) => {
            let text = load_from_file(path)
                .with_context(|| format!("failed to read corpus {}", path.display()))?;
            Corpus::from_text(&text, mode, source.policy())
                .with_context(|| format!("unusable corpus {}", path.display()))?
        }
    };

    info!(candidates = corpus.len(), source = ?source, "corpus loaded");
    Ok(corpus)
}
