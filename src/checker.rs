//! The document-level checker.

use std::sync::Arc;

use layered_equality_document::Document;

use crate::config::EqualityConfig;
use crate::dictionary::{Dictionary, EntryKind};
use crate::relational::{Occurrence, PairResolver};
use crate::scanner::scan;
use crate::suppression::{conjoined, titled, IgnoreList};
use crate::warning::Warning;

/// Runs the dictionary over documents.
///
/// The dictionary is shared; the ignore list is an owned snapshot, so one
/// checker can serve many threads, each checking its own document.
#[derive(Debug, Clone)]
pub struct EqualityChecker {
    dictionary: Arc<Dictionary>,
    ignore: IgnoreList,
}

impl Default for EqualityChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EqualityChecker {
    /// A checker using the bundled English dictionary and no ignored terms.
    pub fn new() -> Self {
        Self::with_dictionary(Dictionary::bundled())
    }

    pub fn with_dictionary(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            ignore: IgnoreList::new(),
        }
    }

    /// A checker using the bundled dictionary and the configured ignore list.
    pub fn from_config(config: &EqualityConfig) -> Self {
        Self::new().with_ignore_list(config.ignore_list())
    }

    pub fn with_ignore_list(mut self, ignore: IgnoreList) -> Self {
        self.ignore = ignore;
        self
    }

    /// Replace the ignore list. The previous list is discarded, not merged.
    pub fn set_ignore_list(&mut self, ignore: IgnoreList) {
        self.ignore = ignore;
    }

    pub fn ignore_list(&self) -> &IgnoreList {
        &self.ignore
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Check a document, returning warnings ordered by position.
    pub fn check(&self, document: &Document) -> Vec<Warning> {
        let dictionary = &*self.dictionary;
        let mut resolver = PairResolver::new(dictionary);
        let mut warnings = Vec::new();

        for sentence in document.sentences() {
            let tokens = sentence.tokens();
            let candidates = scan(dictionary, tokens);
            let pairs = conjoined(dictionary, tokens, &candidates);
            let headings = titled(dictionary, tokens, &candidates);

            for ((candidate, is_conjoined), is_heading) in
                candidates.iter().zip(pairs).zip(headings)
            {
                if self.ignore.contains_key(&candidate.key) {
                    tracing::trace!(key = %candidate.key, "ignored term");
                    continue;
                }

                let first = &tokens[candidate.offset];
                let entry = dictionary.entry(candidate.entry);
                match &entry.kind {
                    EntryKind::Simple => {
                        warnings.push(Warning::simple(entry, first, candidate.surface.as_str()));
                    }
                    EntryKind::PairableGendered => {
                        if !is_conjoined && !is_heading {
                            warnings.push(Warning::simple(entry, first, candidate.surface.as_str()));
                        }
                    }
                    EntryKind::RelationalSide { .. } => {
                        let occurrence =
                            Occurrence::new(candidate.entry, first, candidate.surface.as_str());
                        if let Some(warning) = resolver.observe(occurrence) {
                            warnings.push(warning);
                        }
                    }
                }
            }
        }

        warnings.sort_by_key(|w| (w.start, w.end));
        tracing::debug!(
            sentences = document.sentences().len(),
            warnings = warnings.len(),
            "checked document"
        );
        warnings
    }

    /// Tokenize `text` with the reference tokenizer and check it.
    pub fn check_text(&self, text: &str) -> Vec<Warning> {
        self.check(&Document::from_text(text))
    }
}
