//! Single-word resolution against the pronunciation dictionary.
//!
//! Resolves one alphabetic core (no hyphens) to syllables and stresses:
//! direct lookup first, then a fixed priority sequence of morphological
//! suffix reductions. Unknown words degrade to a single unresolved syllable
//! rather than failing; lyrics full of proper nouns must never abort.

use super::case;
use crate::dictionary::{DictEntry, Dictionary};
use crate::types::{SyllableRecord, STRESS_NONE};

/// A morphological suffix and its reconstruction rule.
struct SuffixRule {
    suffix: &'static str,
    kind: RuleKind,
}

/// How the base entry is rebuilt once a suffix-stripped base is found.
enum RuleKind {
    /// The suffix letters are tacked onto the base's final syllable without
    /// adding a syllable (`-s`).
    AppendLiteral,
    /// The suffix text becomes its own unstressed syllable (`-es`, `-ed`,
    /// `-ing`, `-ly`).
    NewSyllable,
    /// `-d` after an elided `e`: the base's final syllable loses its
    /// trailing character and an `ed` syllable is appended. A bare `d` not
    /// forming `ed` leaves the base's structure untouched.
    ElidedEd,
}

/// Reduction rules in priority order. The first rule whose suffix matches
/// and whose stripped base is in the dictionary wins; later rules are not
/// tried.
const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule { suffix: "s", kind: RuleKind::AppendLiteral },
    SuffixRule { suffix: "es", kind: RuleKind::NewSyllable },
    SuffixRule { suffix: "ed", kind: RuleKind::NewSyllable },
    SuffixRule { suffix: "ing", kind: RuleKind::NewSyllable },
    SuffixRule { suffix: "ly", kind: RuleKind::NewSyllable },
    SuffixRule { suffix: "d", kind: RuleKind::ElidedEd },
];

/// Resolve a single alphabetic core to a record, reapplying its original
/// casing and wrapping with the token's decoration.
///
/// Compound sub-parts pass empty `prefix`/`suffix`; decoration belongs to
/// the whole token only.
pub(crate) fn resolve_word(
    dictionary: &Dictionary,
    original: &str,
    prefix: &str,
    suffix: &str,
) -> SyllableRecord {
    let clean = original.to_lowercase();
    if clean.is_empty() {
        return SyllableRecord::unresolved(original);
    }

    let Some((syllables, stresses)) = derive(dictionary, &clean) else {
        return SyllableRecord {
            syllables: vec![original.to_string()],
            hyphenated: format!("{prefix}{original}{suffix}"),
            stresses: vec![STRESS_NONE],
            is_known: false,
        };
    };

    let cased = case::reconcile(original, &syllables.join("-"));
    SyllableRecord {
        syllables,
        hyphenated: format!("{prefix}{cased}{suffix}"),
        stresses,
        is_known: true,
    }
}

/// Direct lookup, then suffix reduction in priority order.
fn derive(dictionary: &Dictionary, clean: &str) -> Option<(Vec<String>, Vec<u8>)> {
    if let Some(entry) = dictionary.lookup(clean) {
        return Some((entry.syllables.clone(), entry.stresses.clone()));
    }
    for rule in SUFFIX_RULES {
        let Some(base_form) = clean.strip_suffix(rule.suffix) else {
            continue;
        };
        let Some(base) = dictionary.lookup(base_form) else {
            continue;
        };
        return Some(apply_rule(rule, base, clean));
    }
    None
}

/// Rebuild the base entry according to the matched rule.
fn apply_rule(rule: &SuffixRule, base: &DictEntry, clean: &str) -> (Vec<String>, Vec<u8>) {
    let mut syllables = base.syllables.clone();
    let mut stresses = base.stresses.clone();

    match rule.kind {
        RuleKind::AppendLiteral => {
            if let Some(last) = syllables.last_mut() {
                last.push_str(rule.suffix);
            }
        }
        RuleKind::NewSyllable => {
            syllables.push(rule.suffix.to_string());
            stresses.push(STRESS_NONE);
        }
        RuleKind::ElidedEd => {
            // Only the `-ed`-after-elided-`e` shape rebuilds syllables; a
            // bare trailing `d` reuses the base structure as-is.
            if clean.ends_with("ed") {
                if let Some(last) = syllables.last_mut() {
                    last.pop();
                }
                syllables.push("ed".to_string());
                stresses.push(STRESS_NONE);
            }
        }
    }

    (syllables, stresses)
}
