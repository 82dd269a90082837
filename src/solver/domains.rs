//! Per-slot candidate word sets
//!
//! The working state the solver prunes. Snapshot/restore makes rollback an
//! explicit operation: every search node that propagates takes a snapshot
//! first and restores it on any non-success path.

use crate::core::{Puzzle, Slot};
use rustc_hash::{FxHashMap, FxHashSet};

/// Mutable mapping from slot to its current candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    by_slot: FxHashMap<Slot, FxHashSet<String>>,
}

impl Domains {
    /// Give every slot the full vocabulary as its initial domain
    #[must_use]
    pub fn new(puzzle: &Puzzle, vocabulary: &[String]) -> Self {
        let full: FxHashSet<String> = vocabulary.iter().cloned().collect();
        Self {
            by_slot: puzzle
                .slots()
                .iter()
                .map(|&slot| (slot, full.clone()))
                .collect(),
        }
    }

    /// Current candidate words for `slot`
    ///
    /// # Panics
    /// Panics if `slot` is not part of the puzzle this store was built from.
    #[must_use]
    pub fn candidates(&self, slot: Slot) -> &FxHashSet<String> {
        &self.by_slot[&slot]
    }

    /// Number of candidates remaining for `slot`
    #[must_use]
    pub fn size(&self, slot: Slot) -> usize {
        self.candidates(slot).len()
    }

    #[must_use]
    pub fn is_empty(&self, slot: Slot) -> bool {
        self.candidates(slot).is_empty()
    }

    /// Replace the candidate set for `slot` wholesale
    pub fn set(&mut self, slot: Slot, words: FxHashSet<String>) {
        self.by_slot.insert(slot, words);
    }

    /// Collapse the domain of `slot` to a single tentative value
    pub fn fix(&mut self, slot: Slot, word: &str) {
        self.set(slot, std::iter::once(word.to_string()).collect());
    }

    /// Deep copy of the whole store, usable as a rollback point
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Roll back to a prior snapshot; subsequent reads are indistinguishable
    /// from never having mutated
    pub fn restore(&mut self, snapshot: Self) {
        *self = snapshot;
    }
}
