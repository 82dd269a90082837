//! Letter-grid projection of an assignment onto the structure grid

use crate::core::Puzzle;
use crate::solver::Assignment;
use std::fmt;

const BLOCK: char = '█';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Blocked,
    Open(Option<char>),
}

/// 2-D rendering of a (possibly partial) assignment
///
/// Blocked cells render as `█`, unfilled open cells as a space.
pub struct LetterGrid {
    rows: Vec<Vec<Cell>>,
}

impl LetterGrid {
    #[must_use]
    pub fn new(puzzle: &Puzzle, assignment: &Assignment) -> Self {
        let mut rows = vec![vec![Cell::Blocked; puzzle.width()]; puzzle.height()];
        for (row, cells) in rows.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                if puzzle.is_open(row, col) {
                    *cell = Cell::Open(None);
                }
            }
        }
        for (slot, word) in assignment.iter() {
            for (index, letter) in word.chars().enumerate() {
                let (row, col) = slot.cell(index);
                rows[row][col] = Cell::Open(Some(letter));
            }
        }
        Self { rows }
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                match cell {
                    Cell::Blocked => write!(f, "{BLOCK}")?,
                    Cell::Open(Some(letter)) => write!(f, "{letter}")?,
                    Cell::Open(None) => write!(f, " ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
