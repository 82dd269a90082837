//! Gridfill - CLI
//!
//! Fills a crossword structure grid from a vocabulary file and prints the
//! result, optionally writing it to a file.

use anyhow::{Context, Result};
use clap::Parser;
use gridfill::{
    core::Puzzle,
    output::{LetterGrid, print_no_solution, print_solution, write_solution},
    solver::Solver,
    wordlists::loader::load_from_file,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gridfill",
    about = "Fill a crossword grid from a vocabulary using constraint propagation and backtracking",
    version
)]
struct Cli {
    /// Structure grid file ('_' marks an open cell, anything else is blocked)
    structure: PathBuf,

    /// Vocabulary file, one word per line
    words: PathBuf,

    /// Maintain arc consistency after every tentative assignment
    #[arg(short, long)]
    interleave: bool,

    /// Write the filled grid to this file as plain text
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let structure = fs::read_to_string(&cli.structure)
        .with_context(|| format!("reading structure file {}", cli.structure.display()))?;
    let puzzle = Puzzle::parse(&structure)?;
    let vocabulary = load_from_file(&cli.words)
        .with_context(|| format!("reading word list {}", cli.words.display()))?;

    let solver = Solver::new(&puzzle, &vocabulary);
    match solver.solve(cli.interleave) {
        Some(assignment) => {
            let grid = LetterGrid::new(&puzzle, &assignment);
            print_solution(&grid, assignment.len());
            if let Some(path) = &cli.output {
                write_solution(path, &grid)
                    .with_context(|| format!("writing solution to {}", path.display()))?;
            }
        }
        // An unfillable puzzle is a result, not a failure.
        None => print_no_solution(),
    }

    Ok(())
}
