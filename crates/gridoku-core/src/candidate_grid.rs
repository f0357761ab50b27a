//! Candidate domains for every cell of the board.

use std::ops::Index;

use crate::{Digit, DigitGrid, DigitSet, Position, SolvedGrid};

/// Per-cell candidate domains for a full board.
///
/// Every cell holds the [`DigitSet`] of values it may still take. A fresh
/// grid starts with all nine candidates everywhere, and assigning or
/// eliminating only ever shrinks domains. A cell whose domain is a single
/// digit is *decided*.
///
/// The type records state and draws no conclusions of its own; the rules
/// that shrink domains live in the solver.
///
/// # Examples
///
/// ```
/// use gridoku_core::{CandidateGrid, Digit, DigitSet, Position};
///
/// let mut grid = CandidateGrid::new();
/// let pos = Position::new(4, 4);
/// assert_eq!(grid.candidates_at(pos), DigitSet::FULL);
/// assert_eq!(grid.decided_at(pos), None);
///
/// grid.assign(pos, Digit::D5);
/// assert_eq!(grid.decided_at(pos), Some(Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [DigitSet; 81],
}

impl CandidateGrid {
    /// Creates a grid with every candidate open everywhere.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Builds domains from a puzzle: fixed cells become single-digit
    /// domains, blank cells keep all nine candidates.
    #[must_use]
    pub fn from_digit_grid(grid: &DigitGrid) -> Self {
        let mut this = Self::new();
        for (pos, digit) in grid.givens() {
            this.assign(pos, digit);
        }
        this
    }

    /// The candidates still possible at `pos`.
    #[must_use]
    #[inline]
    pub const fn candidates_at(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()]
    }

    /// The digit at `pos` if the cell is decided.
    #[must_use]
    #[inline]
    pub fn decided_at(&self, pos: Position) -> Option<Digit> {
        self.candidates_at(pos).as_single()
    }

    /// Collapses the domain at `pos` to the single digit `digit`.
    ///
    /// Callers are expected to assign only a digit that is still a
    /// candidate at `pos`; anything else manufactures a board state no
    /// completion can satisfy.
    #[inline]
    pub fn assign(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = DigitSet::from_elem(digit);
    }

    /// Removes `digit` from the domain at `pos`.
    ///
    /// Returns whether the domain changed. The domain may become empty;
    /// callers watch for that.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> bool {
        let cell = &mut self.cells[pos.index()];
        let had = cell.contains(digit);
        cell.remove(digit);
        had
    }

    /// Whether every cell is decided.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.len() == 1)
    }

    /// Number of decided cells.
    #[must_use]
    pub fn decided_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.len() == 1).count()
    }

    /// Extracts the completed board, or `None` while any cell is
    /// undecided.
    #[must_use]
    pub fn to_solved(&self) -> Option<SolvedGrid> {
        let mut cells = [Digit::D1; 81];
        for pos in Position::ALL {
            cells[pos.index()] = self.decided_at(pos)?;
        }
        Some(SolvedGrid::from_cells(cells))
    }
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for CandidateGrid {
    type Output = DigitSet;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}
