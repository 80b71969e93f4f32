//! Integration tests for the syllabification engine over a synthetic
//! dictionary.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use syllabize::{Dictionary, Engine, SyllableRecord};

fn sy(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| (*s).to_string()).collect()
}

fn test_engine() -> Engine {
    Engine::new(Dictionary::from_entries([
        ("hello", sy(&["hel", "lo"]), vec![0, 2]),
        ("song", sy(&["song"]), vec![0]),
        ("sing", sy(&["sing"]), vec![2]),
        ("bright", sy(&["bright"]), vec![2]),
        ("translate", sy(&["trans", "late"]), vec![0, 0]),
        ("life", sy(&["life"]), vec![0]),
        ("renew", sy(&["re", "new"]), vec![0, 2]),
        ("pre", sy(&["pre"]), vec![0]),
        ("post", sy(&["post"]), vec![0]),
    ]))
}

fn resolve_one(text: &str) -> SyllableRecord {
    let mut records = test_engine().resolve(text);
    assert_eq!(records.len(), 1, "expected a single token for {text:?}");
    records.remove(0)
}

#[test]
fn syllables_and_stresses_always_match_in_length() {
    let engine = test_engine();
    let inputs = [
        "hello songs singing translated brightly",
        "  xyzabc  life-renewing '... 123hello456",
        "",
        "pre--post HELLO Don't",
    ];
    for input in inputs {
        for record in engine.resolve(input) {
            assert_eq!(
                record.syllables.len(),
                record.stresses.len(),
                "length mismatch for input {input:?}: {record:?}"
            );
        }
    }
}

#[test]
fn known_word_hyphen_count_matches_syllables() {
    for word in ["hello", "songs", "singing", "translated", "brightly"] {
        let record = resolve_one(word);
        assert!(record.is_known);
        assert_eq!(
            record.hyphenated.split('-').count(),
            record.syllables.len(),
            "hyphen segments disagree for {word:?}: {record:?}"
        );
    }
}

#[test]
fn case_variants_resolve_consistently() {
    assert_eq!(resolve_one("hello").hyphenated, "hel-lo");
    assert_eq!(resolve_one("Hello").hyphenated, "Hel-lo");
    assert_eq!(resolve_one("HELLO").hyphenated, "HEL-LO");

    // All variants share the same lowercase syllables.
    for variant in ["hello", "Hello", "HELLO"] {
        assert_eq!(resolve_one(variant).syllables, sy(&["hel", "lo"]));
    }
}

#[test]
fn punctuation_round_trips() {
    assert_eq!(resolve_one("hello!").hyphenated, "hel-lo!");
    assert_eq!(resolve_one("'hello").hyphenated, "'hel-lo");
    assert_eq!(resolve_one("'hello!'").hyphenated, "'hel-lo!'");
}

#[test]
fn compound_word_recombines_parts() {
    let record = resolve_one("life-renewing");
    assert_eq!(record.syllables, sy(&["life", "re", "new", "ing"]));
    assert_eq!(record.stresses, vec![0, 0, 2, 0]);
    assert_eq!(record.hyphenated, "life-re-new-ing");
    assert!(record.is_known);
}

#[test]
fn suffix_derivations() {
    let record = resolve_one("songs");
    assert_eq!(record.syllables, sy(&["songs"]));
    assert_eq!(record.stresses, vec![0]);

    let record = resolve_one("singing");
    assert_eq!(record.syllables, sy(&["sing", "ing"]));
    assert_eq!(record.stresses, vec![2, 0]);

    let record = resolve_one("translated");
    assert_eq!(record.syllables, sy(&["trans", "lat", "ed"]));
    assert_eq!(record.stresses, vec![0, 0, 0]);

    let record = resolve_one("brightly");
    assert_eq!(record.syllables, sy(&["bright", "ly"]));
    assert_eq!(record.stresses, vec![2, 0]);
}

#[test]
fn unknown_word_falls_back() {
    let record = resolve_one("xyzabc");
    assert_eq!(
        record,
        SyllableRecord {
            syllables: sy(&["xyzabc"]),
            hyphenated: "xyzabc".to_string(),
            stresses: vec![0],
            is_known: false,
        }
    );
}

#[test]
fn surrounding_whitespace_yields_empty_records() {
    let records = test_engine().resolve("  hello  ");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], SyllableRecord::empty());
    assert_eq!(records[2], SyllableRecord::empty());
    assert_eq!(records[1].hyphenated, "hel-lo");
    assert!(records[1].is_known);
}

#[test]
fn consecutive_hyphens_collapse() {
    let record = resolve_one("pre--post");
    assert_eq!(record.syllables, sy(&["pre", "post"]));
    assert_eq!(record.hyphenated, "pre-post");
    assert!(record.is_known);
}

#[test]
fn tokens_stay_in_input_order() {
    let records = test_engine().resolve("sing songs brightly");
    let hyphenated: Vec<&str> = records.iter().map(|r| r.hyphenated.as_str()).collect();
    assert_eq!(hyphenated, vec!["sing", "songs", "brightly"]);
}

#[test]
fn engine_built_from_parsed_wordlist() {
    let wordlist = "\
HELLO
Hel*lo\" interj. Etym: [OF. halloer]

SONG
Song, n.

RENEW
Re*new\" v. t.
";
    let engine = Engine::new(Dictionary::parse(wordlist));
    assert_eq!(engine.resolve("Hello!")[0].hyphenated, "Hel-lo!");
    assert_eq!(engine.resolve("songs")[0].syllables, vec!["songs"]);

    let record = &engine.resolve("renewing")[0];
    assert_eq!(record.syllables, vec!["re", "new", "ing"]);
    assert_eq!(record.stresses, vec![0, 2, 0]);
}
