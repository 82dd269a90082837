//! Core domain types for crossword filling
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are immutable once built.

mod puzzle;
mod slot;

pub use puzzle::{Puzzle, PuzzleError};
pub use slot::{Direction, Slot};
