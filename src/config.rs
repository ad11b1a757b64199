//! Host configuration.
//!
//! The only runtime setting is the ignore list. It can be written as TOML:
//!
//! ```toml
//! [ignore_terms]
//! host = "a computer server"
//! pop = "operating on a data structure"
//! ```
//!
//! or as JSON, where the camel-cased `ignoreTerms` key is also accepted.
//! Any value that is not a string is rejected when the config is loaded.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};
use crate::suppression::IgnoreList;

/// Deserialized checker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EqualityConfig {
    /// Term → reason it is acceptable in this project.
    #[serde(default, alias = "ignoreTerms")]
    pub ignore_terms: BTreeMap<String, String>,
}

impl EqualityConfig {
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load from a file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        if path.extension().map_or(false, |e| e == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Build the normalized ignore list.
    pub fn ignore_list(&self) -> IgnoreList {
        self.ignore_terms
            .iter()
            .map(|(term, reason)| (term.as_str(), reason.clone()))
            .collect()
    }
}
