//! Warnings and their rendering.
//!
//! ```text
//! 1:1-1:4: `her` may be insensitive, use `their`, `theirs`, `them` instead
//! 1:27-1:33: `master` / `slave` may be insensitive, use `primary` / `replica` instead
//! ```

use layered_equality_document::{Position, Token};
use serde::Serialize;

use crate::dictionary::{Dictionary, DictionaryEntry};
use crate::relational::Occurrence;

/// A flagged term with suggested replacements.
///
/// `start`/`end` are the span of the first matched token; `matched_text` is
/// the full phrase as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Id of the dictionary entry that fired
    pub rule_id: String,
    pub start: Position,
    pub end: Position,
    pub matched_text: String,
    /// Suggestions with the casing of `matched_text` mirrored
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// The later side of a relational pair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paired: Option<PairedSide>,
}

/// The second-occurring side of a relational warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairedSide {
    pub rule_id: String,
    pub start: Position,
    pub end: Position,
    pub text: String,
    pub suggestions: Vec<String>,
}

impl Warning {
    /// Build a warning for a simple or gendered match.
    pub fn simple(entry: &DictionaryEntry, first: &Token, matched_text: impl Into<String>) -> Self {
        let matched_text = matched_text.into();
        Self {
            rule_id: entry.id.clone(),
            start: first.start,
            end: first.end,
            suggestions: mirror_case(&matched_text, &entry.suggestions),
            matched_text,
            note: entry.note.clone(),
            paired: None,
        }
    }

    /// Build the single warning for a resolved relational pair.
    ///
    /// `first` must be the earlier occurrence; the warning sits on it.
    pub fn relational(dictionary: &Dictionary, first: &Occurrence, second: &Occurrence) -> Self {
        let first_entry = dictionary.entry(first.entry);
        let second_entry = dictionary.entry(second.entry);

        Self {
            rule_id: first_entry.id.clone(),
            start: first.start,
            end: first.end,
            matched_text: first.surface.clone(),
            suggestions: mirror_case(&first.surface, &first_entry.suggestions),
            note: first_entry.note.clone().or_else(|| second_entry.note.clone()),
            paired: Some(PairedSide {
                rule_id: second_entry.id.clone(),
                start: second.start,
                end: second.end,
                text: second.surface.clone(),
                suggestions: mirror_case(&second.surface, &second_entry.suggestions),
            }),
        }
    }

    /// The message without its position prefix.
    pub fn message(&self) -> String {
        match &self.paired {
            None if self.suggestions.is_empty() => {
                format!("`{}` may be insensitive", self.matched_text)
            }
            None => format!(
                "`{}` may be insensitive, use {} instead",
                self.matched_text,
                quote_list(&self.suggestions)
            ),
            Some(paired) => format!(
                "`{}` / `{}` may be insensitive, use {} / {} instead",
                self.matched_text,
                paired.text,
                quote_list(&self.suggestions),
                quote_list(&paired.suggestions)
            ),
        }
    }

    pub fn is_relational(&self) -> bool {
        self.paired.is_some()
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}: {}", self.start, self.end, self.message())
    }
}

fn quote_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| format!("`{}`", s))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Capitalize every suggestion when `surface` starts with an upper-case letter.
pub fn mirror_case(surface: &str, suggestions: &[String]) -> Vec<String> {
    let capitalized = surface.chars().next().map_or(false, char::is_uppercase);
    suggestions
        .iter()
        .map(|s| if capitalized { capitalize(s) } else { s.clone() })
        .collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
