//! Core output types of the syllabification engine.
//!
//! A [`SyllableRecord`] is produced for every whitespace-delimited token of
//! the input text, whether or not the word was found in the pronunciation
//! dictionary.

use serde::{Deserialize, Serialize};

/// No stress on the syllable.
pub const STRESS_NONE: u8 = 0;
/// Secondary stress.
pub const STRESS_SECONDARY: u8 = 1;
/// Primary stress.
pub const STRESS_PRIMARY: u8 = 2;

/// Syllable and stress breakdown for a single input token.
///
/// Invariant: `syllables.len() == stresses.len()`. For compound
/// (hyphen-containing) words, `is_known` is true only if every constituent
/// part resolved against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyllableRecord {
    /// Ordered lowercase syllables. For unresolved words this is the single
    /// original token.
    pub syllables: Vec<String>,
    /// Syllables joined by `-`, with original casing and surrounding
    /// punctuation reapplied.
    pub hyphenated: String,
    /// One stress level per syllable: 0 = unstressed, 1 = secondary,
    /// 2 = primary.
    pub stresses: Vec<u8>,
    /// Whether the word was resolved against the pronunciation dictionary,
    /// directly or via suffix stripping.
    pub is_known: bool,
}

impl SyllableRecord {
    /// Record for an empty token (whitespace artifact).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Unresolved fallback: the text kept verbatim as a single unstressed
    /// syllable.
    #[must_use]
    pub fn unresolved(text: &str) -> Self {
        Self {
            syllables: vec![text.to_string()],
            hyphenated: text.to_string(),
            stresses: vec![STRESS_NONE],
            is_known: false,
        }
    }

    /// Number of syllables in the record.
    #[must_use]
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }
}
