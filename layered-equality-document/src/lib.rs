#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Positioned token model for layered-equality.
//!
//! The equality checker never tokenizes text itself. It consumes a
//! [`Document`]: an ordered list of [`Sentence`]s, each an ordered list of
//! word and punctuation [`Token`]s carrying 1-indexed, end-exclusive
//! line/column positions.
//!
//! Hosts with their own tokenizer build tokens directly with
//! [`Token::new`] and [`Document::new`]. Everyone else can use
//! [`Document::from_text`], a small UAX #29 based tokenizer that keeps
//! hyphenated compounds (`bi-polar`) and dotted acronyms (`O.C.D.`) as
//! single tokens.
//!
//! ```
//! use layered_equality_document::{Document, Position};
//!
//! let document = Document::from_text("Her bike, his bicycle.");
//! let her = document.tokens().next().unwrap();
//! assert_eq!(her.text, "Her");
//! assert_eq!(her.start, Position::new(1, 1));
//! assert_eq!(her.end, Position::new(1, 4));
//! ```

mod document;
mod token;
mod tokenize;

pub use document::{Document, Sentence};
pub use token::{join_surface, Position, Token};
