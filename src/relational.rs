//! Relational pair resolution.
//!
//! Terms like "master" and "slave" are only flagged once both sides of the
//! pair appear in the same document, and then only once. Each pair moves
//! through three states:
//!
//! ```text
//! Unseen ──first side──> OneSideSeen ──other side──> Resolved
//!                          │    ^                      │
//!                          └same┘                      └any side: ignored
//! ```
//!
//! A [`PairResolver`] lives for exactly one document pass.

use std::collections::HashMap;

use layered_equality_document::{Position, Token};

use crate::dictionary::{Dictionary, EntryId};
use crate::warning::Warning;

/// One observed occurrence of a relational side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub entry: EntryId,
    /// Matched text as written
    pub surface: String,
    pub start: Position,
    pub end: Position,
    /// Document-global index of the first matched token
    pub index: usize,
}

impl Occurrence {
    pub fn new(entry: EntryId, first: &Token, surface: impl Into<String>) -> Self {
        Self {
            entry,
            surface: surface.into(),
            start: first.start,
            end: first.end,
            index: first.index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairState {
    Unseen,
    OneSideSeen,
    Resolved,
}

/// First occurrences of both sides of one pair in one document.
///
/// `side_a` is the side with the lower [`EntryId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationalObservation {
    pub side_a: Option<Occurrence>,
    pub side_b: Option<Occurrence>,
    pub resolved: bool,
}

impl RelationalObservation {
    pub fn state(&self) -> PairState {
        match (&self.side_a, &self.side_b, self.resolved) {
            (_, _, true) => PairState::Resolved,
            (None, None, false) => PairState::Unseen,
            _ => PairState::OneSideSeen,
        }
    }
}

/// Per-document state for every relational pair.
#[derive(Debug)]
pub struct PairResolver<'d> {
    dictionary: &'d Dictionary,
    pairs: HashMap<(EntryId, EntryId), RelationalObservation>,
}

impl<'d> PairResolver<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            pairs: HashMap::new(),
        }
    }

    /// Record an occurrence. Returns the pair's warning when this occurrence
    /// resolves it.
    ///
    /// Occurrences must arrive in document order. Entries without a partner
    /// are ignored.
    pub fn observe(&mut self, occurrence: Occurrence) -> Option<Warning> {
        let partner = self.dictionary.partner(occurrence.entry)?;
        let key = pair_key(occurrence.entry, partner);
        let observation = self.pairs.entry(key).or_default();

        if observation.resolved {
            return None;
        }

        let slot = if occurrence.entry == key.0 {
            &mut observation.side_a
        } else {
            &mut observation.side_b
        };
        if slot.is_some() {
            return None;
        }

        tracing::trace!(surface = %occurrence.surface, start = %occurrence.start, "relational side seen");
        *slot = Some(occurrence);

        if observation.side_a.is_none() || observation.side_b.is_none() {
            return None;
        }
        observation.resolved = true;

        let (a, b) = match (&observation.side_a, &observation.side_b) {
            (Some(a), Some(b)) => (a, b),
            _ => return None,
        };

        let (first, second) = if a.index <= b.index { (a, b) } else { (b, a) };
        tracing::trace!(first = %first.surface, second = %second.surface, "relational pair resolved");
        Some(Warning::relational(self.dictionary, first, second))
    }

    /// State of the pair that `entry` belongs to.
    pub fn state(&self, entry: EntryId) -> PairState {
        self.observation(entry)
            .map_or(PairState::Unseen, RelationalObservation::state)
    }

    pub fn observation(&self, entry: EntryId) -> Option<&RelationalObservation> {
        let partner = self.dictionary.partner(entry)?;
        self.pairs.get(&pair_key(entry, partner))
    }
}

fn pair_key(a: EntryId, b: EntryId) -> (EntryId, EntryId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence(dictionary: &Dictionary, key: &str, surface: &str, column: usize, index: usize) -> Occurrence {
        let entry = dictionary.lookup_id(key).unwrap();
        let token = Token::new(
            surface,
            Position::new(1, column),
            Position::new(1, column + surface.chars().count()),
            index,
        );
        Occurrence::new(entry, &token, surface)
    }

    #[test]
    fn test_state_machine() {
        let dictionary = Dictionary::bundled();
        let master = dictionary.lookup_id("master").unwrap();
        let mut resolver = PairResolver::new(&dictionary);

        assert_eq!(resolver.state(master), PairState::Unseen);

        let first = resolver.observe(occurrence(&dictionary, "master", "master", 1, 0));
        assert!(first.is_none());
        assert_eq!(resolver.state(master), PairState::OneSideSeen);

        let repeat = resolver.observe(occurrence(&dictionary, "masters", "masters", 10, 2));
        assert!(repeat.is_none());
        assert_eq!(resolver.state(master), PairState::OneSideSeen);

        let warning = resolver
            .observe(occurrence(&dictionary, "slaves", "slaves", 20, 4))
            .unwrap();
        assert_eq!(resolver.state(master), PairState::Resolved);
        assert_eq!(
            warning.to_string(),
            "1:1-1:7: `master` / `slaves` may be insensitive, use `primary` / `replica` instead"
        );

        assert!(resolver
            .observe(occurrence(&dictionary, "slave", "slave", 30, 6))
            .is_none());
        assert!(resolver
            .observe(occurrence(&dictionary, "master", "master", 40, 8))
            .is_none());
    }

    #[test]
    fn test_first_occurrence_is_kept() {
        let dictionary = Dictionary::bundled();
        let slave = dictionary.lookup_id("slave").unwrap();
        let mut resolver = PairResolver::new(&dictionary);

        resolver.observe(occurrence(&dictionary, "slaves", "Slaves", 1, 0));
        resolver.observe(occurrence(&dictionary, "slave", "slave", 9, 2));

        let observation = resolver.observation(slave).unwrap();
        let recorded = observation.side_a.as_ref().or(observation.side_b.as_ref()).unwrap();
        assert_eq!(recorded.surface, "Slaves");
        assert_eq!(recorded.index, 0);
    }

    #[test]
    fn test_sides_ordered_by_position() {
        let dictionary = Dictionary::bundled();
        let mut resolver = PairResolver::new(&dictionary);

        resolver.observe(occurrence(&dictionary, "slaves", "Slaves", 1, 0));
        let warning = resolver
            .observe(occurrence(&dictionary, "master", "Master", 9, 2))
            .unwrap();

        assert_eq!(warning.matched_text, "Slaves");
        assert_eq!(warning.rule_id, "slave");
        let paired = warning.paired.as_ref().unwrap();
        assert_eq!(paired.text, "Master");
        assert_eq!(paired.rule_id, "master");
        assert_eq!(
            warning.to_string(),
            "1:1-1:7: `Slaves` / `Master` may be insensitive, use `Replica` / `Primary` instead"
        );
    }

    #[test]
    fn test_each_side_mirrors_its_own_case() {
        let dictionary = Dictionary::bundled();
        let mut resolver = PairResolver::new(&dictionary);

        resolver.observe(occurrence(&dictionary, "master", "Master", 1, 0));
        let warning = resolver
            .observe(occurrence(&dictionary, "slave", "slave", 12, 2))
            .unwrap();
        assert_eq!(
            warning.message(),
            "`Master` / `slave` may be insensitive, use `Primary` / `replica` instead"
        );
    }

    #[test]
    fn test_non_relational_entries_are_ignored() {
        let dictionary = Dictionary::bundled();
        let lame = dictionary.lookup_id("lame").unwrap();
        let mut resolver = PairResolver::new(&dictionary);

        assert!(resolver
            .observe(occurrence(&dictionary, "lame", "lame", 1, 0))
            .is_none());
        assert_eq!(resolver.state(lame), PairState::Unseen);
        assert!(resolver.observation(lame).is_none());
    }

    #[test]
    fn test_observation_states() {
        let mut observation = RelationalObservation::default();
        assert_eq!(observation.state(), PairState::Unseen);
        observation.resolved = true;
        assert_eq!(observation.state(), PairState::Resolved);
    }
}
