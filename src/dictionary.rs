//! The dictionary of flagged terms.
//!
//! Every entry owns one or more surface patterns. Patterns are indexed by
//! their normalized key, so lookups from the scanner are a single hash probe
//! per candidate window. The store is validated once at construction and is
//! immutable afterwards; runtime exclusions live in
//! [`IgnoreList`](crate::IgnoreList), never in here.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{DictionaryError, EqualityResult};
use crate::normalize::normalize;

static BUNDLED_SOURCE: &str = include_str!("../data/dictionary.ron");

static BUNDLED: Lazy<Arc<Dictionary>> = Lazy::new(|| {
    let dictionary =
        Dictionary::from_ron_str(BUNDLED_SOURCE).expect("Invalid bundled dictionary");
    tracing::debug!(
        entries = dictionary.len(),
        max_phrase_len = dictionary.max_phrase_len(),
        "loaded bundled dictionary"
    );
    Arc::new(dictionary)
});

/// How matches of an entry are treated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Warn on every occurrence.
    #[default]
    Simple,
    /// Gendered term; silent when joined to another gendered term by
    /// `/`, `and` or `or` ("his/her").
    PairableGendered,
    /// One side of a relational pair ("master" / "slave"); only flagged once
    /// both sides occur in the same document.
    RelationalSide { partner: String },
}

/// A flagged term with its variants and suggested replacements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Stable rule identifier, reported on warnings
    pub id: String,
    #[serde(default)]
    pub kind: EntryKind,
    /// Surface variants; whitespace separates tokens
    pub patterns: Vec<String>,
    /// Replacements in canonical (usually lower-case) form
    pub suggestions: Vec<String>,
    /// Attached verbatim to every warning for this entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DictionaryEntry {
    pub fn new<P, S>(id: impl Into<String>, kind: EntryKind, patterns: P, suggestions: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            id: id.into(),
            kind,
            patterns: patterns.into_iter().map(Into::into).collect(),
            suggestions: suggestions.into_iter().map(Into::into).collect(),
            note: None,
        }
    }

    /// Set the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Index of an entry within its [`Dictionary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Validated, immutable term store.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    /// normalized key → owning entry
    by_key: HashMap<String, EntryId>,
    /// relational partner of each entry, if any
    partners: Vec<Option<EntryId>>,
    max_phrase_len: usize,
}

impl Dictionary {
    /// The English dictionary shipped with the crate.
    pub fn bundled() -> Arc<Dictionary> {
        Arc::clone(&BUNDLED)
    }

    /// A dictionary that matches nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse and validate entries written in RON.
    pub fn from_ron_str(source: &str) -> EqualityResult<Self> {
        let entries: Vec<DictionaryEntry> = ron::from_str(source)?;
        Self::from_entries(entries)
    }

    /// Validate and index a list of entries.
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> EqualityResult<Self> {
        let mut by_id: HashMap<&str, EntryId> = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_id.insert(entry.id.as_str(), EntryId(idx)).is_some() {
                return Err(DictionaryError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }

        let mut by_key: HashMap<String, EntryId> = HashMap::new();
        let mut max_phrase_len = 0;

        for (idx, entry) in entries.iter().enumerate() {
            if entry.patterns.is_empty() {
                return Err(DictionaryError::EmptyPattern {
                    id: entry.id.clone(),
                });
            }

            for pattern in &entry.patterns {
                let key = normalize(pattern);
                if key.is_empty() {
                    return Err(DictionaryError::EmptyPattern {
                        id: entry.id.clone(),
                    });
                }

                match by_key.get(&key).copied() {
                    Some(owner) if owner.0 != idx => {
                        return Err(DictionaryError::DuplicateKey {
                            key,
                            first: entries[owner.0].id.clone(),
                            second: entry.id.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        by_key.insert(key, EntryId(idx));
                    }
                }

                max_phrase_len = max_phrase_len.max(pattern.split_whitespace().count());
            }
        }

        let mut partners = Vec::with_capacity(entries.len());
        for entry in &entries {
            let partner = match &entry.kind {
                EntryKind::RelationalSide { partner } => {
                    Some(resolve_partner(&entries, &by_id, &entry.id, partner)?)
                }
                EntryKind::Simple | EntryKind::PairableGendered => None,
            };
            partners.push(partner);
        }

        tracing::debug!(
            entries = entries.len(),
            keys = by_key.len(),
            max_phrase_len,
            "built dictionary"
        );

        Ok(Self {
            entries,
            by_key,
            partners,
            max_phrase_len,
        })
    }

    /// Look up the entry owning a normalized key.
    pub fn lookup(&self, key: &str) -> Option<&DictionaryEntry> {
        self.lookup_id(key).map(|id| self.entry(id))
    }

    /// Look up the id of the entry owning a normalized key.
    pub fn lookup_id(&self, key: &str) -> Option<EntryId> {
        self.by_key.get(key).copied()
    }

    /// Panics if `id` came from another dictionary.
    pub fn entry(&self, id: EntryId) -> &DictionaryEntry {
        &self.entries[id.0]
    }

    /// The opposite side of a relational entry.
    pub fn partner(&self, id: EntryId) -> Option<EntryId> {
        self.partners.get(id.0).copied().flatten()
    }

    /// Find an entry by its rule id.
    pub fn get(&self, rule_id: &str) -> Option<&DictionaryEntry> {
        self.entries.iter().find(|e| e.id == rule_id)
    }

    /// The largest number of tokens in any pattern.
    pub fn max_phrase_len(&self) -> usize {
        self.max_phrase_len
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn resolve_partner(
    entries: &[DictionaryEntry],
    by_id: &HashMap<&str, EntryId>,
    id: &str,
    partner: &str,
) -> EqualityResult<EntryId> {
    let partner_id = by_id
        .get(partner)
        .copied()
        .ok_or_else(|| DictionaryError::MissingPartner {
            id: id.to_string(),
            partner: partner.to_string(),
        })?;

    match &entries[partner_id.0].kind {
        EntryKind::RelationalSide { partner: back } if back == id && partner != id => {
            Ok(partner_id)
        }
        EntryKind::RelationalSide { .. } => Err(DictionaryError::AsymmetricPartner {
            id: id.to_string(),
            partner: partner.to_string(),
        }),
        EntryKind::Simple | EntryKind::PairableGendered => {
            Err(DictionaryError::PartnerNotRelational {
                id: id.to_string(),
                partner: partner.to_string(),
            })
        }
    }
}
