//! `Syllabize` - syllable and stress annotation for song lyrics.
//!
//! Converts free-form lyric text into per-token syllable breakdowns with
//! stress levels, suitable for melody-fitting or karaoke-style display.
//! Resolution happens against an immutable pronunciation dictionary built
//! from a marked wordlist; unknown words degrade to unresolved
//! single-syllable records instead of erroring.

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod types;

pub use dictionary::{DictEntry, Dictionary};
pub use engine::Engine;
pub use error::{Error, Result};
pub use types::SyllableRecord;
