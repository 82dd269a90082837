//! Terminal output formatting

mod display;
mod grid;

pub use display::{print_no_solution, print_solution, write_solution};
pub use grid::LetterGrid;
