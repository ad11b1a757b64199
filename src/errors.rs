//! Error types for dictionary construction and configuration loading.
//!
//! Scanning itself never fails: unknown text simply produces no warning.
//! Everything that can go wrong happens before the first document is checked.

use thiserror::Error;

/// Malformed dictionary data, reported when a [`Dictionary`](crate::Dictionary) is built.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The RON source could not be parsed into entries.
    #[error("failed to parse dictionary: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Two entries share the same id.
    #[error("duplicate entry id `{id}`")]
    DuplicateId { id: String },

    /// An entry has no patterns, or a pattern normalizes to nothing.
    #[error("entry `{id}` has an empty pattern")]
    EmptyPattern { id: String },

    /// Two different entries claim the same normalized key.
    #[error("normalized key `{key}` is claimed by both `{first}` and `{second}`")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    /// A relational side names a partner id that does not exist.
    #[error("relational entry `{id}` names missing partner `{partner}`")]
    MissingPartner { id: String, partner: String },

    /// A relational side names an entry that is not itself relational.
    #[error("relational entry `{id}` names `{partner}`, which is not a relational side")]
    PartnerNotRelational { id: String, partner: String },

    /// The partner of `id` points somewhere other than back at `id`.
    #[error("relational entry `{id}` names `{partner}`, but `{partner}` does not name it back")]
    AsymmetricPartner { id: String, partner: String },
}

/// Errors raised while loading an [`EqualityConfig`](crate::EqualityConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {path}: {message}")]
    Read { path: String, message: String },

    /// TOML source was malformed or had the wrong shape.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON source was malformed or had the wrong shape.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for dictionary operations.
pub type EqualityResult<T> = Result<T, DictionaryError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
