//! Solver facade
//!
//! Orchestrates the full pipeline: fresh domains per attempt, node
//! consistency, a full arc-consistency pass, then backtracking search in
//! the requested mode.

use super::assignment::Assignment;
use super::consistency::Propagator;
use super::domains::Domains;
use super::search::Search;
use crate::core::Puzzle;
use log::debug;

/// Crossword CSP solver
///
/// Borrows the puzzle model and the vocabulary; each call to
/// [`solve`](Self::solve) works on its own freshly initialized domain store.
///
/// # Examples
/// ```
/// use gridfill::core::Puzzle;
/// use gridfill::solver::Solver;
/// use gridfill::wordlists::loader::words_from_slice;
///
/// let puzzle = Puzzle::parse("___\n##_\n##_").unwrap();
/// let vocabulary = words_from_slice(&["cat", "ten", "tan"]);
/// let solver = Solver::new(&puzzle, &vocabulary);
///
/// let solution = solver.solve(true).expect("fillable");
/// assert!(solution.is_complete(&puzzle));
/// ```
pub struct Solver<'p> {
    puzzle: &'p Puzzle,
    vocabulary: &'p [String],
}

impl<'p> Solver<'p> {
    #[must_use]
    pub const fn new(puzzle: &'p Puzzle, vocabulary: &'p [String]) -> Self {
        Self { puzzle, vocabulary }
    }

    /// Fill the puzzle, returning a complete assignment or `None` when no
    /// solution exists
    ///
    /// With `interleave` set, the search maintains arc consistency after
    /// every tentative assignment; both modes agree on solvability and only
    /// ever differ in which valid solution they find first.
    #[must_use]
    pub fn solve(&self, interleave: bool) -> Option<Assignment> {
        let mut domains = Domains::new(self.puzzle, self.vocabulary);
        let propagator = Propagator::new(self.puzzle);

        propagator.enforce_node_consistency(&mut domains);
        if !propagator.ac3(&mut domains) {
            debug!("arc consistency emptied a domain before search");
            return None;
        }

        let mut search = Search::new(self.puzzle);
        let mut assignment = Assignment::new();
        let found = if interleave {
            search.backtrack_with_inference(&mut domains, &mut assignment, &propagator)
        } else {
            search.backtrack(&mut domains, &mut assignment)
        };
        debug!(
            "search expanded {} nodes with {} backtracks",
            search.nodes_expanded(),
            search.backtracks()
        );

        found.then_some(assignment)
    }
}
