//! Candidate scanning.
//!
//! Walks the tokens of one sentence and probes the dictionary with every
//! window of consecutive word tokens, longest first. A hit consumes its
//! tokens, so `mentally ill` never also reports a bare `ill`.

use layered_equality_document::{join_surface, Token};

use crate::dictionary::{Dictionary, EntryId};
use crate::normalize::normalize_tokens;

/// A dictionary hit over a run of word tokens, before any suppression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Matched entry
    pub entry: EntryId,
    /// Normalized key of the matched window
    pub key: String,
    /// Offset of the first matched token within the scanned slice
    pub offset: usize,
    /// Number of tokens covered
    pub len: usize,
    /// The matched text as written
    pub surface: String,
}

impl Candidate {
    /// Offset one past the last matched token.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The matched tokens within the slice that was scanned.
    pub fn tokens<'t>(&self, tokens: &'t [Token]) -> &'t [Token] {
        &tokens[self.offset..self.end()]
    }
}

/// Scan the tokens of a sentence for dictionary hits.
///
/// Windows only span word tokens; punctuation ends a window. Results are in
/// token order and never overlap.
pub fn scan(dictionary: &Dictionary, tokens: &[Token]) -> Vec<Candidate> {
    let max_len = dictionary.max_phrase_len();
    let mut candidates = Vec::new();
    if max_len == 0 {
        return candidates;
    }

    let mut offset = 0;
    while offset < tokens.len() {
        let run = word_run(&tokens[offset..], max_len);
        let hit = (1..=run).rev().find_map(|len| {
            let window = &tokens[offset..offset + len];
            let key = normalize_tokens(window.iter().map(|t| t.text.as_str()));
            dictionary.lookup_id(&key).map(|entry| (entry, key, len))
        });

        match hit {
            Some((entry, key, len)) => {
                candidates.push(Candidate {
                    entry,
                    key,
                    offset,
                    len,
                    surface: join_surface(&tokens[offset..offset + len]),
                });
                offset += len;
            }
            None => offset += 1,
        }
    }

    candidates
}

/// Number of leading word tokens, capped at `max`.
fn word_run(tokens: &[Token], max: usize) -> usize {
    tokens.iter().take(max).take_while(|t| t.is_word()).count()
}
