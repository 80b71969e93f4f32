//! Immutable pronunciation dictionary.
//!
//! Maps lowercase headwords to citation-form syllable entries. Built once
//! (from a pronunciation-marked wordlist, or from synthetic entries in
//! tests), read-only for the lifetime of the process. Because resolution
//! never writes, a `Dictionary` can be shared across threads without
//! locking.

pub mod parser;

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Citation-form pronunciation of a headword: lowercase syllables and their
/// stress levels, without case or decoration applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    /// Ordered lowercase syllables.
    pub syllables: Vec<String>,
    /// Stress level per syllable (0/1/2), same length as `syllables`.
    pub stresses: Vec<u8>,
}

impl DictEntry {
    /// Build an entry, truncating the longer side if the lists disagree in
    /// length so the per-record invariant holds at the source.
    #[must_use]
    pub fn new(syllables: Vec<String>, stresses: Vec<u8>) -> Self {
        let mut entry = Self { syllables, stresses };
        let n = entry.syllables.len().min(entry.stresses.len());
        entry.syllables.truncate(n);
        entry.stresses.truncate(n);
        entry
    }
}

/// Read-only headword lookup table.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, DictEntry>,
}

impl Dictionary {
    /// Build a dictionary from pre-split entries. Headwords are lowercased.
    ///
    /// Intended for tests and for callers that source pronunciations from
    /// somewhere other than a marked wordlist.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>, Vec<u8>)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, syllables, stresses)| {
                (word.as_ref().to_lowercase(), DictEntry::new(syllables, stresses))
            })
            .collect();
        Self { entries }
    }

    /// Parse a pronunciation-marked wordlist text into a dictionary.
    ///
    /// Malformed entries are skipped with a warning; a partial dictionary is
    /// acceptable output.
    #[must_use]
    pub fn parse(wordlist: &str) -> Self {
        let entries = parser::parse_wordlist(wordlist);
        tracing::info!("Parsed {} dictionary entries from wordlist", entries.len());
        Self { entries }
    }

    /// Load and parse a wordlist file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs_err::read_to_string(path)
            .map_err(|e| Error::io(e, Some(path.to_path_buf())))?;
        Ok(Self::parse(&text))
    }

    /// Look up a lowercase headword.
    #[must_use]
    pub fn lookup(&self, headword: &str) -> Option<&DictEntry> {
        self.entries.get(headword)
    }

    /// Whether the headword is present.
    #[must_use]
    pub fn contains(&self, headword: &str) -> bool {
        self.entries.contains_key(headword)
    }

    /// Number of headwords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
