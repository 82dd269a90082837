//! Display functions for fill results

use super::grid::LetterGrid;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;

/// Print a filled grid with a summary banner
pub fn print_solution(grid: &LetterGrid, slot_count: usize) {
    println!("\n{}", "─".repeat(40).cyan());
    print!("{grid}");
    println!("{}", "─".repeat(40).cyan());
    println!("{}", format!("✅ Filled {slot_count} slots").green().bold());
}

/// Report that the puzzle has no solution
pub fn print_no_solution() {
    println!("{}", "❌ No solution.".red().bold());
}

/// Write the rendered grid to a plain-text file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_solution<P: AsRef<Path>>(path: P, grid: &LetterGrid) -> io::Result<()> {
    fs::write(path, grid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Puzzle, Slot};
    use crate::solver::Assignment;

    #[test]
    fn written_solution_matches_display() {
        let puzzle = Puzzle::parse("__\n##").unwrap();
        let mut assignment = Assignment::new();
        assignment.insert(Slot::new(0, 0, Direction::Across, 2), "OX".to_string());
        let grid = LetterGrid::new(&puzzle, &assignment);

        let path = std::env::temp_dir().join("gridfill_write_solution_test.txt");
        write_solution(&path, &grid).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(written, grid.to_string());
    }
}
