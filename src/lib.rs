//! Gridfill
//!
//! A crossword grid filler that treats the grid as a constraint-satisfaction
//! problem: slots are variables, vocabulary words are values, and crossing
//! cells are binary constraints. Solving combines node/arc consistency (AC-3)
//! with heuristic backtracking search.
//!
//! # Quick Start
//!
//! ```rust
//! use gridfill::core::Puzzle;
//! use gridfill::solver::Solver;
//! use gridfill::wordlists::loader::words_from_slice;
//!
//! // A 3x3 grid with one across slot and one down slot crossing at the
//! // top-right cell. '_' marks an open cell.
//! let puzzle = Puzzle::parse("___\n##_\n##_").unwrap();
//! let vocabulary = words_from_slice(&["cat", "ten", "tan"]);
//!
//! let solver = Solver::new(&puzzle, &vocabulary);
//! let solution = solver.solve(false).expect("this grid is fillable");
//! assert!(solution.is_complete(&puzzle));
//! ```

// Core domain types
pub mod core;

// CSP solving
pub mod solver;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;
