//! Lyric syllabification engine.
//!
//! Splits input text on whitespace and resolves each token to a
//! [`SyllableRecord`]: decoration stripped, hyphenated compounds split and
//! recombined, words looked up (directly or via suffix stripping) against
//! the pronunciation dictionary, original casing and punctuation restored.
//!
//! Resolution is purely functional over an injected read-only
//! [`Dictionary`]; an [`Engine`] can be called from multiple threads
//! without locking. Nothing is cached between calls.

mod case;
mod resolver;

use std::sync::LazyLock;

use regex::Regex;

use crate::dictionary::Dictionary;
use crate::types::SyllableRecord;

/// Regex splitting input text into tokens on runs of whitespace.
#[allow(clippy::expect_used)]
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("valid regex: RE_WHITESPACE")
});

/// Word-resolution engine over an immutable pronunciation dictionary.
#[derive(Debug, Clone)]
pub struct Engine {
    dictionary: Dictionary,
}

impl Engine {
    /// Create an engine over the given dictionary.
    #[must_use]
    pub const fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// The dictionary this engine resolves against.
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Resolve a line of text into one record per whitespace-split token.
    ///
    /// Leading/trailing whitespace yields empty tokens, which map to empty
    /// records; callers that want them filtered must do so themselves.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Vec<SyllableRecord> {
        RE_WHITESPACE
            .split(text)
            .map(|token| self.resolve_token(token))
            .collect()
    }

    /// Resolve a single token: strip decoration, split compounds, look up.
    fn resolve_token(&self, token: &str) -> SyllableRecord {
        if token.is_empty() {
            return SyllableRecord::empty();
        }

        let (prefix, suffix) = strip_decorations(token);
        let core = clean_core(token);
        if core.is_empty() {
            // Nothing resolvable: the whole token verbatim as one syllable.
            return SyllableRecord::unresolved(token);
        }

        if core.contains('-') {
            self.resolve_compound(token, &core, prefix, suffix)
        } else {
            resolver::resolve_word(&self.dictionary, &core, prefix, suffix)
        }
    }

    /// Resolve a hyphenated compound part by part and recombine.
    fn resolve_compound(
        &self,
        token: &str,
        core: &str,
        prefix: &str,
        suffix: &str,
    ) -> SyllableRecord {
        // Consecutive hyphens collapse: empty parts are discarded.
        let parts: Vec<&str> = core.split('-').filter(|p| !p.is_empty()).collect();
        if parts.is_empty() {
            return SyllableRecord::unresolved(token);
        }

        let records: Vec<SyllableRecord> = parts
            .iter()
            .map(|part| resolver::resolve_word(&self.dictionary, part, "", ""))
            .collect();

        let mut syllables = Vec::new();
        let mut stresses = Vec::new();
        let mut is_known = true;
        for record in &records {
            syllables.extend(record.syllables.iter().cloned());
            stresses.extend(record.stresses.iter().copied());
            is_known &= record.is_known;
        }

        let joined = records
            .iter()
            .map(|r| r.hyphenated.as_str())
            .collect::<Vec<_>>()
            .join("-");
        let cased = case::reconcile(token, &joined);

        SyllableRecord {
            syllables,
            hyphenated: format!("{prefix}{cased}{suffix}"),
            stresses,
            is_known,
        }
    }
}

/// Maximal leading and trailing non-letter runs of a token.
fn strip_decorations(token: &str) -> (&str, &str) {
    let prefix_end = token
        .find(|c: char| c.is_alphabetic())
        .unwrap_or(token.len());
    let suffix_start = token
        .rfind(|c: char| c.is_alphabetic())
        .and_then(|i| token[i..].chars().next().map(|c| i + c.len_utf8()))
        .unwrap_or(prefix_end);
    (&token[..prefix_end], &token[suffix_start..])
}

/// Token with every character that is neither a letter nor a hyphen
/// removed. Interior digits and punctuation are dropped, not treated as
/// boundaries.
fn clean_core(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphabetic() || *c == '-')
        .collect()
}
