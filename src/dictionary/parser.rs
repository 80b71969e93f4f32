//! Wordlist parsing for the pronunciation dictionary.
//!
//! Consumes a Webster-style pronunciation-marked wordlist: a headword line
//! is any fully-uppercase, non-numeric line, and the following non-blank
//! line carries the marked pronunciation. Stress/syllable markers:
//! `"` closes a syllable with primary stress, `` ` `` with secondary
//! stress, `*` and `-` with no stress.
//!
//! Parsing never aborts. Entries with no parseable pronunciation are
//! substituted with an unknown single-syllable form and logged; a partial
//! dictionary is acceptable output.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use super::DictEntry;
use crate::types::{STRESS_NONE, STRESS_PRIMARY, STRESS_SECONDARY};

lazy_static! {
    /// Part-of-speech and etymology tokens that terminate a pronunciation.
    static ref MARKER_TOKENS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("n.");
        s.insert("v.");
        s.insert("a.");
        s.insert("adv.");
        s.insert("adj.");
        s.insert("p.");
        s.insert("prep.");
        s.insert("pron.");
        s.insert("conj.");
        s.insert("interj.");
        s.insert("pl.");
        s.insert("imp.");
        s.insert("obs.");
        s.insert("Etym:");
        s
    };

    /// Parenthetical alternate pronunciations, e.g. `(; 277)`.
    #[allow(clippy::expect_used)]
    static ref RE_PAREN: Regex =
        Regex::new(r"\([^)]*\)").expect("valid regex: RE_PAREN");
}

/// Parse a whole wordlist text into headword entries.
pub fn parse_wordlist(text: &str) -> HashMap<String, DictEntry> {
    let lines: Vec<&str> = text.lines().collect();
    let mut entries = HashMap::new();

    for (idx, line) in lines.iter().enumerate() {
        if !is_headword_line(line) {
            continue;
        }
        let headwords = split_headwords(line);
        if headwords.is_empty() {
            continue;
        }

        match pronunciation_line(&lines, idx) {
            Some(pron) => parse_entry_group(&headwords, pron, &mut entries),
            None => {
                tracing::warn!("No pronunciation line for headword(s) {headwords:?}");
                for headword in &headwords {
                    insert_unknown(headword, &mut entries);
                }
            }
        }
    }

    entries
}

/// Whether a line is a headword line: non-empty, fully uppercase, at least
/// one letter, no digits. Uppercase letters plus `;`/`,`/`-`/`'`/space only.
fn is_headword_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|c| c.is_ascii_uppercase())
        && trimmed
            .chars()
            .all(|c| c.is_ascii_uppercase() || matches!(c, ';' | ',' | '-' | '\'' | ' '))
}

/// Split a headword line on `;`/`,` into individual headwords.
fn split_headwords(line: &str) -> Vec<String> {
    line.split([';', ','])
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Find the pronunciation line for the headword at `idx`: the next
/// non-blank line, unless that line is itself a headword line.
fn pronunciation_line<'a>(lines: &[&'a str], idx: usize) -> Option<&'a str> {
    let next = lines[idx + 1..].iter().find(|l| !l.trim().is_empty())?;
    if is_headword_line(next) {
        return None;
    }
    Some(next)
}

/// Parse one headword group and its pronunciation line into `entries`.
fn parse_entry_group(
    headwords: &[String],
    pron_line: &str,
    entries: &mut HashMap<String, DictEntry>,
) {
    let truncated = truncate_at_marker(pron_line);
    let cleaned = RE_PAREN.replace_all(&truncated, "");

    let variants: Vec<&str> = cleaned
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    for (i, headword) in headwords.iter().enumerate() {
        // One variant per headword when counts line up; otherwise every
        // headword shares the first (possibly only) variant.
        let form = if variants.len() == headwords.len() {
            variants.get(i).copied()
        } else {
            variants.first().copied()
        };

        match form.and_then(parse_pronunciation) {
            Some(entry) => insert(headword, entry, entries),
            None => {
                tracing::warn!("Malformed pronunciation for {headword:?}: {pron_line:?}");
                insert_unknown(headword, entries);
            }
        }
    }
}

/// Cut the pronunciation line at the first part-of-speech/etymology token.
fn truncate_at_marker(line: &str) -> String {
    line.split_whitespace()
        .take_while(|token| !MARKER_TOKENS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode a single marked pronunciation form into syllables and stresses.
///
/// Returns `None` when the form carries no letters at all. A form with
/// letters but no markers decodes to a single unstressed syllable.
fn parse_pronunciation(form: &str) -> Option<DictEntry> {
    let mut syllables = Vec::new();
    let mut stresses = Vec::new();
    let mut current = String::new();

    for c in form.chars() {
        if c.is_alphabetic() {
            current.extend(c.to_lowercase());
            continue;
        }
        let stress = match c {
            '"' => STRESS_PRIMARY,
            '`' => STRESS_SECONDARY,
            '*' | '-' => STRESS_NONE,
            _ => continue,
        };
        if !current.is_empty() {
            syllables.push(std::mem::take(&mut current));
            stresses.push(stress);
        }
    }
    if !current.is_empty() {
        syllables.push(current);
        stresses.push(STRESS_NONE);
    }

    if syllables.is_empty() {
        return None;
    }
    Some(DictEntry { syllables, stresses })
}

/// Insert an entry under the normalized headword key; hyphenated headwords
/// are additionally keyed by their hyphen-stripped form. First entry for a
/// key wins.
fn insert(headword: &str, entry: DictEntry, entries: &mut HashMap<String, DictEntry>) {
    let key = normalize_headword(headword);
    if key.is_empty() {
        return;
    }
    if key.contains('-') {
        let flat: String = key.chars().filter(|c| *c != '-').collect();
        entries.entry(flat).or_insert_with(|| entry.clone());
    }
    entries.entry(key).or_insert(entry);
}

/// Substitute record for a headword with no parseable pronunciation.
fn insert_unknown(headword: &str, entries: &mut HashMap<String, DictEntry>) {
    let key = normalize_headword(headword);
    if key.is_empty() {
        return;
    }
    let entry = DictEntry {
        syllables: vec![key.clone()],
        stresses: vec![STRESS_NONE],
    };
    insert(headword, entry, entries);
}

/// Lowercase and keep letters and internal hyphens only.
fn normalize_headword(headword: &str) -> String {
    headword
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || *c == '-')
        .collect()
}
