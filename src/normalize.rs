//! Canonical comparison keys.
//!
//! A key is the lower-cased text with every separator removed: hyphens,
//! straight and curly apostrophes, periods and whitespace. That makes
//! `bi-polar`, `bipolar` and `bi polar` one key, and the same for `Down's`,
//! `Down’s` and `Downs`, or `O.C.D.` and `OCD`.
//!
//! Because whitespace is a separator too, a two-word window can share a key
//! with a one-word entry: `man kind` is keyed like `mankind` and is flagged as
//! that entry.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\-\x{2010}\x{2011}'\x{2018}\x{2019}\x{02BC}.]+")
        .expect("Invalid separator regex")
});

/// Normalize a term or phrase to its comparison key.
///
/// Never fails; characters that are not separators pass through lower-cased.
pub fn normalize(text: &str) -> String {
    SEPARATORS.replace_all(text, "").to_lowercase()
}

/// Normalize a window of token texts as if they were joined by spaces.
pub fn normalize_tokens<'a>(texts: impl IntoIterator<Item = &'a str>) -> String {
    texts.into_iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        assert_eq!(normalize("Her"), "her");
        assert_eq!(normalize("HOST"), "host");
    }

    #[test]
    fn test_hyphen_and_space_variants() {
        assert_eq!(normalize("bi-polar"), "bipolar");
        assert_eq!(normalize("bipolar"), "bipolar");
        assert_eq!(normalize("bi polar"), "bipolar");
        assert_eq!(normalize("bi\u{2010}polar"), "bipolar");
    }

    #[test]
    fn test_apostrophe_variants() {
        assert_eq!(normalize("Down's"), "downs");
        assert_eq!(normalize("Down’s"), "downs");
        assert_eq!(normalize("Downs"), "downs");
        assert_eq!(normalize("Down’s Syndrome"), normalize("Downs Syndrome"));
    }

    #[test]
    fn test_word_windows_collide_with_compounds() {
        assert_eq!(normalize_tokens(["man", "kind"]), normalize("mankind"));
        assert_eq!(normalize_tokens(["bi", "polar"]), "bipolar");
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(normalize("O.C.D."), "ocd");
        assert_eq!(normalize("OCD"), "ocd");
    }

    #[test]
    fn test_other_characters_pass_through() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("PS3"), "ps3");
        assert_eq!(normalize("naïve"), "naïve");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn test_token_windows() {
        assert_eq!(normalize_tokens(["mentally", "ill"]), "mentallyill");
        assert_eq!(normalize_tokens(["mentally", "ill"]), normalize("mentally ill"));
        assert_eq!(normalize_tokens(["Down’s", "Syndrome"]), "downssyndrome");
    }
}
