//! Sentence and document containers.

use crate::{join_surface, Token};

/// An ordered run of tokens ending at a sentence boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The sentence as written, with whitespace collapsed to single spaces.
    pub fn text(&self) -> String {
        join_surface(&self.tokens)
    }
}

/// A tokenized document: sentences of positioned tokens.
///
/// Token indices are global to the document and strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    /// Wrap sentences produced by an external tokenizer.
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Tokenize raw text with the bundled reference tokenizer.
    pub fn from_text(text: &str) -> Self {
        Self::new(crate::tokenize::tokenize(text))
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Iterate every token of every sentence in document order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens().iter())
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.iter().all(Sentence::is_empty)
    }
}
