#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Inclusive-language checking over tokenized text.
//!
//! Given a [`Document`] of positioned tokens, the checker flags words and
//! phrases that may be gendered, ableist or otherwise insensitive, and
//! suggests neutral alternatives.
//!
//! ## Pipeline
//!
//! Each sentence runs through the same stages:
//!
//! - [`scan`] - Longest-match lookup of word runs against the [`Dictionary`]
//! - [`conjoined`] - Drops gendered terms paired with their counterpart (`he or she`)
//! - [`titled`] - Drops gendered terms used as a heading name (`he - an encoder`)
//! - [`IgnoreList`] - Drops terms the host has declared acceptable
//! - [`PairResolver`] - Reports `master`/`slave` style pairs once both sides appear
//!
//! The result is a position-ordered list of [`Warning`]s.
//!
//! ## Dictionary
//!
//! The English dictionary ships with the crate as RON and is parsed and
//! validated once, on first use. Hosts can supply their own with
//! [`Dictionary::from_ron_str`].
//!
//! ## Example
//!
//! ```
//! use layered_equality::{Document, EqualityChecker, IgnoreList};
//!
//! let checker = EqualityChecker::new()
//!     .with_ignore_list(IgnoreList::new().with("host", "a computer server"));
//!
//! let warnings = checker.check(&Document::from_text("The host sent her a packet."));
//! assert_eq!(warnings.len(), 1);
//! assert_eq!(
//!     warnings[0].to_string(),
//!     "1:15-1:18: `her` may be insensitive, use `their`, `theirs`, `them` instead"
//! );
//! ```

mod checker;
mod config;
mod dictionary;
mod display;
mod errors;
mod normalize;
mod relational;
mod scanner;
mod suppression;
mod warning;

pub use checker::EqualityChecker;
pub use config::EqualityConfig;
pub use dictionary::{Dictionary, DictionaryEntry, EntryId, EntryKind};
pub use display::WarningDisplay;
pub use errors::{ConfigError, ConfigResult, DictionaryError, EqualityResult};
pub use normalize::{normalize, normalize_tokens};
pub use relational::{Occurrence, PairResolver, PairState, RelationalObservation};
pub use scanner::{scan, Candidate};
pub use suppression::{
    conjoined, is_connector, titled, IgnoreList, CONNECTORS, HEADING_DASHES,
};
pub use warning::{mirror_case, PairedSide, Warning};

// Re-export the token model for convenience
pub use layered_equality_document::{join_surface, Document, Position, Sentence, Token};
