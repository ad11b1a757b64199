//! Suppression rules applied to scanned candidates.
//!
//! - [`IgnoreList`]: host-supplied terms that never warn.
//! - [`conjoined`]: gendered terms written as an inclusive pair
//!   ("his/her", "her and his", "her or his").
//! - [`titled`]: gendered terms naming a heading ("he - A robust HTML
//!   entity encoder").

use std::collections::BTreeMap;

use layered_equality_document::Token;

use crate::dictionary::{Dictionary, EntryKind};
use crate::normalize::normalize;
use crate::scanner::Candidate;

/// Tokens that join two gendered terms into an inclusive construction.
pub const CONNECTORS: &[&str] = &["/", "and", "or"];

/// Terms excluded from matching, each with a free-text justification.
///
/// Keys are stored normalized, so `"Host"` and `"host"` are the same term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    terms: BTreeMap<String, String>,
}

impl IgnoreList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term, returning the justification it replaced.
    pub fn insert(&mut self, term: &str, justification: impl Into<String>) -> Option<String> {
        self.terms.insert(normalize(term), justification.into())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, term: &str, justification: impl Into<String>) -> Self {
        self.insert(term, justification);
        self
    }

    /// Check an already normalized key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.terms.contains_key(key)
    }

    /// Check a raw term.
    pub fn is_ignored(&self, term: &str) -> bool {
        self.contains_key(&normalize(term))
    }

    pub fn justification(&self, term: &str) -> Option<&str> {
        self.terms.get(&normalize(term)).map(String::as_str)
    }

    /// Iterate `(normalized term, justification)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = IgnoreList::new();
        for (term, justification) in iter {
            list.insert(term.as_ref(), justification);
        }
        list
    }
}

/// Returns true for `/`, `and` and `or`, in any case.
pub fn is_connector(token: &Token) -> bool {
    let lower = token.text.to_lowercase();
    CONNECTORS.contains(&lower.as_str())
}

/// Mark candidates that take part in an inclusive gendered pair.
///
/// Two gendered candidates are conjoined when exactly one connector token
/// sits between them. Anything else in between, including a comma, keeps
/// both. The result is parallel to `candidates`.
pub fn conjoined(dictionary: &Dictionary, tokens: &[Token], candidates: &[Candidate]) -> Vec<bool> {
    let mut suppressed = vec![false; candidates.len()];
    let gendered =
        |c: &Candidate| matches!(dictionary.entry(c.entry).kind, EntryKind::PairableGendered);

    for (idx, pair) in candidates.windows(2).enumerate() {
        let (left, right) = (&pair[0], &pair[1]);
        if !gendered(left) || !gendered(right) {
            continue;
        }

        let between = left.end();
        if right.offset == between + 1 && tokens.get(between).map_or(false, is_connector) {
            tracing::trace!(left = %left.surface, right = %right.surface, "conjoined gendered pair");
            suppressed[idx] = true;
            suppressed[idx + 1] = true;
        }
    }

    suppressed
}

/// Dashes that separate a name from its description in a heading.
pub const HEADING_DASHES: &[&str] = &["-", "\u{2013}", "\u{2014}"];

/// Mark gendered candidates used as the name in a `name - description`
/// heading, such as `he - A robust HTML entity encoder`.
///
/// The candidate must be directly followed by a dash token with whitespace
/// on both sides, and something must follow the dash. The result is
/// parallel to `candidates`.
pub fn titled(dictionary: &Dictionary, tokens: &[Token], candidates: &[Candidate]) -> Vec<bool> {
    candidates
        .iter()
        .map(|candidate| {
            if !matches!(dictionary.entry(candidate.entry).kind, EntryKind::PairableGendered) {
                return false;
            }

            let last = &tokens[candidate.end() - 1];
            let heading = match (tokens.get(candidate.end()), tokens.get(candidate.end() + 1)) {
                (Some(dash), Some(next)) => {
                    HEADING_DASHES.contains(&dash.text.as_str())
                        && !last.touches(dash)
                        && !dash.touches(next)
                }
                _ => false,
            };
            if heading {
                tracing::trace!(surface = %candidate.surface, "gendered term used as heading");
            }
            heading
        })
        .collect()
}
