//! Case reconciliation for derived hyphenated forms.
//!
//! Reapplies the original token's capitalization pattern onto the lowercase
//! hyphenated string built from dictionary syllables.

/// Reapply `original`'s casing pattern to `hyphenated`.
///
/// Applies only when the original, lowercased, equals its own letters-and-
/// hyphens core. Compound sub-parts pass clean originals and so always
/// qualify; a whole token with interior punctuation does not, and comes
/// back unchanged. At most one transformation is applied, with the
/// all-uppercase check taking precedence over title-case.
pub(crate) fn reconcile(original: &str, hyphenated: &str) -> String {
    let lower = original.to_lowercase();
    let clean: String = lower
        .chars()
        .filter(|c| c.is_alphabetic() || *c == '-')
        .collect();
    if lower != clean {
        return hyphenated.to_string();
    }

    if original == original.to_uppercase() {
        return hyphenated.to_uppercase();
    }
    if is_title_case(original) {
        return capitalize_first(hyphenated);
    }
    hyphenated.to_string()
}

/// First letter uppercase, remainder identical to its lowercase form.
fn is_title_case(original: &str) -> bool {
    let mut chars = original.chars();
    chars.next().is_some_and(|first| {
        let rest = chars.as_str();
        first.is_uppercase() && rest == rest.to_lowercase()
    })
}

/// Uppercase only the first character, leaving syllable-boundary letters
/// lowercase.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out: String = first.to_uppercase().collect();
        out.push_str(chars.as_str());
        out
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn all_uppercase_original_uppercases_whole() {
        assert_eq!(reconcile("HELLO", "hel-lo"), "HEL-LO");
        assert_eq!(reconcile("LIFE-RENEWING", "life-re-new-ing"), "LIFE-RE-NEW-ING");
    }

    #[test]
    fn title_case_capitalizes_first_only() {
        assert_eq!(reconcile("Hello", "hel-lo"), "Hel-lo");
        assert_eq!(reconcile("Life-renewing", "life-re-new-ing"), "Life-re-new-ing");
    }

    #[test]
    fn lowercase_original_unchanged() {
        assert_eq!(reconcile("hello", "hel-lo"), "hel-lo");
    }

    #[test]
    fn mixed_case_original_unchanged() {
        assert_eq!(reconcile("hEllo", "hel-lo"), "hel-lo");
    }

    #[test]
    fn punctuated_original_skips_reconciliation() {
        // Lowercased original no longer equals its letters-and-hyphens core.
        assert_eq!(reconcile("'Hello!", "hel-lo"), "hel-lo");
    }

    #[test]
    fn uppercase_takes_precedence_for_single_letter() {
        assert_eq!(reconcile("A", "a"), "A");
    }
}
