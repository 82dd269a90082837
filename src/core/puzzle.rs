//! Puzzle model: structure grid, slots, overlaps and neighbor sets
//!
//! A `Puzzle` is parsed once from a structure grid and is read-only during
//! solving. Overlaps and neighbor lists are precomputed from geometry so the
//! solver never touches the grid itself.

use super::slot::{Direction, Slot};
use rustc_hash::FxHashMap;
use std::fmt;

/// Character marking an open cell in a structure grid
const OPEN: char = '_';

/// Minimum run length that counts as a slot
const MIN_SLOT_LENGTH: usize = 2;

/// Error type for malformed structure grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The structure grid contains no rows
    Empty,
    /// The structure grid contains no run of open cells long enough for a word
    NoSlots,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "structure grid is empty"),
            Self::NoSlots => write!(
                f,
                "structure grid has no open run of at least {MIN_SLOT_LENGTH} cells"
            ),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Immutable crossword puzzle model
///
/// Holds the structure grid, every slot, the overlap relation between
/// crossing slots, and per-slot neighbor lists. Slots and neighbor lists are
/// kept sorted so that iteration order is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    height: usize,
    width: usize,
    open: Vec<Vec<bool>>,
    slots: Vec<Slot>,
    overlaps: FxHashMap<(Slot, Slot), (usize, usize)>,
    neighbors: FxHashMap<Slot, Vec<Slot>>,
}

impl Puzzle {
    /// Parse a structure grid where `'_'` marks an open cell and any other
    /// character marks a blocked cell
    ///
    /// Empty lines are skipped; short rows are padded with blocked cells to
    /// the width of the longest row.
    ///
    /// # Errors
    /// Returns `PuzzleError::Empty` for a grid with no rows, and
    /// `PuzzleError::NoSlots` for a grid without any open run of at least
    /// two cells.
    pub fn parse(structure: &str) -> Result<Self, PuzzleError> {
        let rows: Vec<&str> = structure.lines().filter(|line| !line.is_empty()).collect();
        if rows.is_empty() {
            return Err(PuzzleError::Empty);
        }

        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);
        let open: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| {
                let mut cells: Vec<bool> = row.chars().map(|c| c == OPEN).collect();
                cells.resize(width, false);
                cells
            })
            .collect();
        let height = open.len();

        let slots = scan_slots(&open);
        if slots.is_empty() {
            return Err(PuzzleError::NoSlots);
        }

        let mut overlaps = FxHashMap::default();
        let mut neighbors: FxHashMap<Slot, Vec<Slot>> = FxHashMap::default();
        for (i, &a) in slots.iter().enumerate() {
            for &b in &slots[i + 1..] {
                if let Some((ia, ib)) = shared_cell(a, b) {
                    overlaps.insert((a, b), (ia, ib));
                    overlaps.insert((b, a), (ib, ia));
                    neighbors.entry(a).or_default().push(b);
                    neighbors.entry(b).or_default().push(a);
                }
            }
        }
        for list in neighbors.values_mut() {
            list.sort_unstable();
        }

        Ok(Self {
            height,
            width,
            open,
            slots,
            overlaps,
            neighbors,
        })
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at `(row, col)` is open; out-of-range cells are blocked
    #[must_use]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.open
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// All slots, in stable identity order
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Overlap between two slots as character positions `(index in a, index in b)`
    ///
    /// Returns `None` when the slots share no cell. The relation is
    /// symmetric up to swapping the indices.
    #[must_use]
    pub fn overlap(&self, a: Slot, b: Slot) -> Option<(usize, usize)> {
        self.overlaps.get(&(a, b)).copied()
    }

    /// Slots sharing a cell with `slot`, in stable identity order
    pub fn neighbors(&self, slot: Slot) -> &[Slot] {
        self.neighbors.get(&slot).map_or(&[], Vec::as_slice)
    }

    /// Number of slots crossing `slot`
    #[must_use]
    pub fn degree(&self, slot: Slot) -> usize {
        self.neighbors(slot).len()
    }
}

/// Collect maximal open runs of at least `MIN_SLOT_LENGTH` cells in both
/// directions, sorted into stable identity order
fn scan_slots(open: &[Vec<bool>]) -> Vec<Slot> {
    let height = open.len();
    let width = open.first().map_or(0, Vec::len);
    let mut slots = Vec::new();

    for row in 0..height {
        let mut col = 0;
        while col < width {
            if open[row][col] {
                let start = col;
                while col < width && open[row][col] {
                    col += 1;
                }
                let length = col - start;
                if length >= MIN_SLOT_LENGTH {
                    slots.push(Slot::new(row, start, Direction::Across, length));
                }
            } else {
                col += 1;
            }
        }
    }

    for col in 0..width {
        let mut row = 0;
        while row < height {
            if open[row][col] {
                let start = row;
                while row < height && open[row][col] {
                    row += 1;
                }
                let length = row - start;
                if length >= MIN_SLOT_LENGTH {
                    slots.push(Slot::new(start, col, Direction::Down, length));
                }
            } else {
                row += 1;
            }
        }
    }

    slots.sort_unstable();
    slots
}

/// Shared cell between two slots as character positions, if any
///
/// Maximal runs never overlap in the same direction, so two slots share at
/// most one cell.
fn shared_cell(a: Slot, b: Slot) -> Option<(usize, usize)> {
    a.cells()
        .enumerate()
        .find_map(|(ia, cell)| b.index_of(cell).map(|ib| (ia, ib)))
}
