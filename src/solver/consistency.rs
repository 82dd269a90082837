//! Node and arc consistency enforcement
//!
//! Node consistency drops candidates that cannot fit their slot at all; the
//! AC-3 fixed point then drops candidates with no compatible partner in a
//! crossing slot. An emptied domain is an expected outcome reported as
//! `false`, never an error: during search it simply triggers a backtrack.

use super::domains::Domains;
use crate::core::{Puzzle, Slot};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Enforces unary and binary constraints over a [`Domains`] store
pub struct Propagator<'p> {
    puzzle: &'p Puzzle,
}

impl<'p> Propagator<'p> {
    #[must_use]
    pub const fn new(puzzle: &'p Puzzle) -> Self {
        Self { puzzle }
    }

    /// Drop every candidate whose length differs from its slot's length
    ///
    /// Idempotent; run once at the start of a solve.
    pub fn enforce_node_consistency(&self, domains: &mut Domains) {
        for &slot in self.puzzle.slots() {
            let keep: FxHashSet<String> = domains
                .candidates(slot)
                .iter()
                .filter(|word| word.len() == slot.length)
                .cloned()
                .collect();
            domains.set(slot, keep);
        }
    }

    /// Make `x` arc consistent with `y`
    ///
    /// Removes from x's domain every word whose crossing letter is matched
    /// by no word left in y's domain. Returns whether anything was removed;
    /// a pair without an overlap is left untouched.
    pub fn revise(&self, domains: &mut Domains, x: Slot, y: Slot) -> bool {
        let Some((ix, iy)) = self.puzzle.overlap(x, y) else {
            return false;
        };

        let support: FxHashSet<u8> = domains
            .candidates(y)
            .iter()
            .filter_map(|word| word.as_bytes().get(iy).copied())
            .collect();

        let before = domains.size(x);
        let keep: FxHashSet<String> = domains
            .candidates(x)
            .iter()
            .filter(|word| {
                word.as_bytes()
                    .get(ix)
                    .is_some_and(|letter| support.contains(letter))
            })
            .cloned()
            .collect();

        let revised = keep.len() != before;
        if revised {
            domains.set(x, keep);
        }
        revised
    }

    /// Run AC-3 over every ordered pair of crossing slots
    ///
    /// Returns `false` as soon as any domain empties (the puzzle is
    /// unsolvable from this state), `true` once the fixed point is reached.
    pub fn ac3(&self, domains: &mut Domains) -> bool {
        let mut worklist = VecDeque::new();
        for &x in self.puzzle.slots() {
            for &y in self.puzzle.neighbors(x) {
                worklist.push_back((x, y));
            }
        }
        self.ac3_from(domains, worklist)
    }

    /// Run AC-3 seeded with an explicit worklist of ordered arcs
    ///
    /// Each revision of x re-enqueues `(neighbor, x)` for x's other
    /// neighbors, since tightening x may invalidate their consistency.
    /// Terminates because revisions only ever remove from finite domains.
    pub fn ac3_from(&self, domains: &mut Domains, mut worklist: VecDeque<(Slot, Slot)>) -> bool {
        while let Some((x, y)) = worklist.pop_front() {
            if self.revise(domains, x, y) {
                if domains.is_empty(x) {
                    return false;
                }
                for &neighbor in self.puzzle.neighbors(x) {
                    if neighbor != y {
                        worklist.push_back((neighbor, x));
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::wordlists::loader::words_from_slice;

    fn corner_puzzle() -> Puzzle {
        Puzzle::parse("___\n##_\n##_").unwrap()
    }

    fn across() -> Slot {
        Slot::new(0, 0, Direction::Across, 3)
    }

    fn down() -> Slot {
        Slot::new(0, 2, Direction::Down, 3)
    }

    fn node_consistent_domains(puzzle: &Puzzle, words: &[&str]) -> Domains {
        let vocabulary = words_from_slice(words);
        let mut domains = Domains::new(puzzle, &vocabulary);
        Propagator::new(puzzle).enforce_node_consistency(&mut domains);
        domains
    }

    #[test]
    fn node_consistency_keeps_only_fitting_lengths() {
        let puzzle = corner_puzzle();
        let domains = node_consistent_domains(&puzzle, &["cat", "ten", "tan", "geese", "ox"]);

        for &slot in puzzle.slots() {
            assert_eq!(domains.size(slot), 3);
            for word in domains.candidates(slot) {
                assert_eq!(word.len(), slot.length);
            }
        }
    }

    #[test]
    fn node_consistency_is_idempotent() {
        let puzzle = corner_puzzle();
        let propagator = Propagator::new(&puzzle);
        let mut domains = node_consistent_domains(&puzzle, &["cat", "ten", "tan", "geese"]);

        let once = domains.clone();
        propagator.enforce_node_consistency(&mut domains);
        assert_eq!(domains, once);
    }

    #[test]
    fn revise_removes_unsupported_words() {
        let puzzle = corner_puzzle();
        let propagator = Propagator::new(&puzzle);
        let mut domains = node_consistent_domains(&puzzle, &["cat", "ten", "tan"]);

        // Only CAT ends in a letter that starts some down word.
        assert!(propagator.revise(&mut domains, across(), down()));
        assert_eq!(
            domains.candidates(across()),
            &["CAT".to_string()].into_iter().collect()
        );

        // Already consistent: nothing further to remove.
        assert!(!propagator.revise(&mut domains, across(), down()));
    }

    #[test]
    fn revise_without_overlap_is_a_no_op() {
        let puzzle = Puzzle::parse("___\n###\n___").unwrap();
        let propagator = Propagator::new(&puzzle);
        let mut domains = node_consistent_domains(&puzzle, &["cat", "dog"]);

        let top = Slot::new(0, 0, Direction::Across, 3);
        let bottom = Slot::new(2, 0, Direction::Across, 3);
        assert!(!propagator.revise(&mut domains, top, bottom));
        assert_eq!(domains.size(top), 2);
    }

    #[test]
    fn ac3_reaches_the_expected_fixed_point() {
        let puzzle = corner_puzzle();
        let propagator = Propagator::new(&puzzle);
        let mut domains = node_consistent_domains(&puzzle, &["cat", "ten", "tan"]);

        assert!(propagator.ac3(&mut domains));

        assert_eq!(
            domains.candidates(across()),
            &["CAT".to_string()].into_iter().collect()
        );
        assert_eq!(
            domains.candidates(down()),
            &["TEN".to_string(), "TAN".to_string()].into_iter().collect()
        );
    }

    #[test]
    fn ac3_fixed_point_leaves_support_for_every_word() {
        let puzzle = corner_puzzle();
        let propagator = Propagator::new(&puzzle);
        let mut domains =
            node_consistent_domains(&puzzle, &["cat", "ten", "tan", "bat", "nap", "ion"]);

        assert!(propagator.ac3(&mut domains));

        for &x in puzzle.slots() {
            for &y in puzzle.neighbors(x) {
                let (ix, iy) = puzzle.overlap(x, y).unwrap();
                for wx in domains.candidates(x) {
                    let supported = domains
                        .candidates(y)
                        .iter()
                        .any(|wy| wx.as_bytes()[ix] == wy.as_bytes()[iy]);
                    assert!(supported, "{wx} in {x} has no support in {y}");
                }
            }
        }
    }

    #[test]
    fn ac3_is_idempotent_once_consistent() {
        let puzzle = corner_puzzle();
        let propagator = Propagator::new(&puzzle);
        let mut domains = node_consistent_domains(&puzzle, &["cat", "ten", "tan"]);

        assert!(propagator.ac3(&mut domains));
        let fixed_point = domains.clone();

        assert!(propagator.ac3(&mut domains));
        assert_eq!(domains, fixed_point);
    }

    #[test]
    fn ac3_reports_failure_when_a_domain_empties() {
        let puzzle = corner_puzzle();
        let propagator = Propagator::new(&puzzle);
        // No word ends in a letter that starts another: TEN and TAN both end
        // in N, and no word starts with N.
        let mut domains = node_consistent_domains(&puzzle, &["ten", "tan"]);

        assert!(!propagator.ac3(&mut domains));
    }

    #[test]
    fn seeded_ac3_propagates_from_a_collapsed_domain() {
        let puzzle = corner_puzzle();
        let propagator = Propagator::new(&puzzle);
        let mut domains = node_consistent_domains(&puzzle, &["cat", "ten", "tan"]);

        domains.fix(across(), "CAT");
        let seeds: VecDeque<(Slot, Slot)> = puzzle
            .neighbors(across())
            .iter()
            .map(|&neighbor| (neighbor, across()))
            .collect();

        assert!(propagator.ac3_from(&mut domains, seeds));
        assert_eq!(
            domains.candidates(down()),
            &["TEN".to_string(), "TAN".to_string()].into_iter().collect()
        );
    }
}
