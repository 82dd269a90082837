//! Backtracking search over partial assignments
//!
//! Variable selection uses minimum-remaining-values with a degree tie-break;
//! value ordering uses the least-constraining-value heuristic. Remaining
//! ties fall back to the stable identity order of slots and to lexicographic
//! word order, so a search is fully reproducible.
//!
//! Two modes share the selection logic: plain backtracking, and backtracking
//! that maintains arc consistency after every tentative assignment. In the
//! latter, domain pruning performed for one candidate is rolled back via
//! snapshot/restore before a sibling candidate is tried.

use super::assignment::Assignment;
use super::consistency::Propagator;
use super::domains::Domains;
use crate::core::{Puzzle, Slot};
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::collections::VecDeque;

/// Depth-first backtracking search engine
pub struct Search<'p> {
    puzzle: &'p Puzzle,
    nodes_expanded: u64,
    backtracks: u64,
}

impl<'p> Search<'p> {
    #[must_use]
    pub const fn new(puzzle: &'p Puzzle) -> Self {
        Self {
            puzzle,
            nodes_expanded: 0,
            backtracks: 0,
        }
    }

    /// Candidate values tried so far
    #[must_use]
    pub const fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Search frames that exhausted every candidate
    #[must_use]
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Pick the unassigned slot with the fewest remaining candidates
    ///
    /// Ties go to the slot crossing the most others (highest degree), then
    /// to the stable identity order. Returns `None` when every slot is
    /// assigned.
    #[must_use]
    pub fn select_unassigned_variable(
        &self,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<Slot> {
        self.puzzle
            .slots()
            .iter()
            .copied()
            .filter(|&slot| !assignment.contains(slot))
            .min_by_key(|&slot| (domains.size(slot), Reverse(self.puzzle.degree(slot)), slot))
    }

    /// Candidates for `slot`, least-constraining first
    ///
    /// Each word is scored by how many candidates it would eliminate from
    /// the domains of unassigned neighbors; equal scores fall back to
    /// lexicographic order. Pure lookahead: no domain is mutated.
    #[must_use]
    pub fn order_domain_values(
        &self,
        domains: &Domains,
        assignment: &Assignment,
        slot: Slot,
    ) -> Vec<String> {
        let mut scored: Vec<(usize, String)> = domains
            .candidates(slot)
            .iter()
            .map(|word| {
                (
                    self.elimination_count(domains, assignment, slot, word),
                    word.clone(),
                )
            })
            .collect();
        scored.sort_unstable();
        scored.into_iter().map(|(_, word)| word).collect()
    }

    /// Candidates `word` would rule out across unassigned neighbor domains
    fn elimination_count(
        &self,
        domains: &Domains,
        assignment: &Assignment,
        slot: Slot,
        word: &str,
    ) -> usize {
        let mut eliminated = 0;
        for &neighbor in self.puzzle.neighbors(slot) {
            if assignment.contains(neighbor) {
                continue;
            }
            let Some((i, j)) = self.puzzle.overlap(slot, neighbor) else {
                continue;
            };
            let Some(&letter) = word.as_bytes().get(i) else {
                continue;
            };
            eliminated += domains
                .candidates(neighbor)
                .iter()
                .filter(|other| other.as_bytes().get(j) != Some(&letter))
                .count();
        }
        eliminated
    }

    /// Whether `assignment` violates no constraint
    ///
    /// Checks word length per slot, letter agreement for every assigned
    /// crossing pair, and global word uniqueness over the whole assignment.
    #[must_use]
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        for (slot, word) in assignment.iter() {
            if word.len() != slot.length {
                return false;
            }
            for &neighbor in self.puzzle.neighbors(slot) {
                let Some(other) = assignment.get(neighbor) else {
                    continue;
                };
                let Some((i, j)) = self.puzzle.overlap(slot, neighbor) else {
                    continue;
                };
                if word.as_bytes().get(i) != other.as_bytes().get(j) {
                    return false;
                }
            }
        }

        let mut seen = FxHashSet::default();
        assignment.iter().all(|(_, word)| seen.insert(word))
    }

    /// Plain backtracking search
    ///
    /// On success returns `true` with `assignment` complete; on exhaustion
    /// returns `false` with `assignment` back in its entry state.
    pub fn backtrack(&mut self, domains: &mut Domains, assignment: &mut Assignment) -> bool {
        if assignment.is_complete(self.puzzle) {
            return true;
        }
        let Some(slot) = self.select_unassigned_variable(domains, assignment) else {
            return false;
        };

        for word in self.order_domain_values(domains, assignment, slot) {
            self.nodes_expanded += 1;
            assignment.insert(slot, word);
            if self.consistent(assignment) && self.backtrack(domains, assignment) {
                return true;
            }
            assignment.remove(slot);
        }

        self.backtracks += 1;
        false
    }

    /// Backtracking with arc consistency maintained after every assignment
    ///
    /// Before recursing, the chosen slot's domain collapses to the tentative
    /// word and AC-3 runs seeded with the arcs into that slot. The domain
    /// store is restored from a snapshot on every non-success path, so
    /// pruning never leaks into sibling candidates.
    pub fn backtrack_with_inference(
        &mut self,
        domains: &mut Domains,
        assignment: &mut Assignment,
        propagator: &Propagator<'_>,
    ) -> bool {
        if assignment.is_complete(self.puzzle) {
            return true;
        }
        let Some(slot) = self.select_unassigned_variable(domains, assignment) else {
            return false;
        };

        for word in self.order_domain_values(domains, assignment, slot) {
            self.nodes_expanded += 1;
            assignment.insert(slot, word.clone());
            if self.consistent(assignment) {
                let saved = domains.snapshot();
                domains.fix(slot, &word);
                let seeds: VecDeque<(Slot, Slot)> = self
                    .puzzle
                    .neighbors(slot)
                    .iter()
                    .map(|&neighbor| (neighbor, slot))
                    .collect();
                if propagator.ac3_from(domains, seeds)
                    && self.backtrack_with_inference(domains, assignment, propagator)
                {
                    return true;
                }
                domains.restore(saved);
            }
            assignment.remove(slot);
        }

        self.backtracks += 1;
        false
    }
}
