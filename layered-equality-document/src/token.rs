use serde::{Deserialize, Serialize};

/// A 1-indexed line/column location in the source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A word or punctuation token produced by an upstream tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Literal source text
    pub text: String,
    /// Inclusive start position
    pub start: Position,
    /// Exclusive end position
    pub end: Position,
    /// Sequence index within the whole document
    pub index: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: Position, end: Position, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// Returns true when the token carries at least one letter or digit.
    ///
    /// Everything else (`.`, `/`, `,`, `-`) is punctuation.
    pub fn is_word(&self) -> bool {
        is_word_text(&self.text)
    }

    /// Returns true when `next` starts exactly where this token ends.
    pub fn touches(&self, next: &Token) -> bool {
        self.end == next.start
    }
}

pub(crate) fn is_word_text(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

/// Rebuild the surface text of a run of tokens.
///
/// Tokens that touch are concatenated; any gap, including a line break,
/// becomes a single space.
pub fn join_surface(tokens: &[Token]) -> String {
    let mut surface = String::new();
    let mut previous: Option<&Token> = None;
    for token in tokens {
        if let Some(prev) = previous {
            if !prev.touches(token) {
                surface.push(' ');
            }
        }
        surface.push_str(&token.text);
        previous = Some(token);
    }
    surface
}
