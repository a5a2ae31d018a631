//! English stemming via the Snowball (Porter2) algorithm.

use rust_stemmers::{Algorithm, Stemmer};
use std::sync::LazyLock;

static ENGLISH: LazyLock<Stemmer> = LazyLock::new(|| Stemmer::create(Algorithm::English));

/// Reduce a single word to its stem: `"running"` → `"run"`.
///
/// The word is lowercased first, since the Snowball rules only match
/// lowercase suffixes. Deterministic and total; empty input gives an empty stem.
pub fn stem(word: &str) -> String {
    let lowered = word.to_lowercase();
    ENGLISH.stem(&lowered).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_common_suffixes() {
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("jumps"), "jump");
        assert_eq!(stem("walked"), "walk");
        assert_eq!(stem("first"), "first");
    }

    #[test]
    fn test_stem_is_case_insensitive() {
        assert_eq!(stem("Running"), stem("running"));
        assert_eq!(stem("RUNNING"), "run");
    }

    #[test]
    fn test_stem_empty_and_idempotent() {
        assert_eq!(stem(""), "");
        for word in ["running", "jumps", "walked"] {
            let once = stem(word);
            assert_eq!(stem(&once), once, "stem not idempotent for {word}");
        }
    }
}
