//! Partial and complete slot-to-word assignments

use crate::core::{Puzzle, Slot};
use rustc_hash::FxHashMap;

/// A mapping from slot to its chosen word, partial or complete
///
/// Grows monotonically along a search path and shrinks only on backtrack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    entries: FxHashMap<Slot, String>,
}

impl Assignment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Word assigned to `slot`, if any
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.entries.get(&slot).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, slot: Slot) -> bool {
        self.entries.contains_key(&slot)
    }

    pub fn insert(&mut self, slot: Slot, word: String) {
        self.entries.insert(slot, word);
    }

    pub fn remove(&mut self, slot: Slot) -> Option<String> {
        self.entries.remove(&slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every slot of `puzzle` has an entry
    #[must_use]
    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        puzzle.slots().iter().all(|&slot| self.contains(slot))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> {
        self.entries.iter().map(|(&slot, word)| (slot, word.as_str()))
    }
}
