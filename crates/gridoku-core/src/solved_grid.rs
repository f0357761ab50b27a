//! Completed boards.

use std::{fmt, ops::Index, str::FromStr};

use crate::{Digit, DigitGrid, DigitSet, GridError, House, Position};

/// A fully decided board: every cell holds a digit.
///
/// The type cannot represent blanks, so every value read out of it is in
/// the range 1-9. Construction does not verify the Sudoku rules;
/// [`is_valid`](Self::is_valid) checks them, and grids produced by the
/// solver always pass.
///
/// # Examples
///
/// ```
/// use gridoku_core::SolvedGrid;
///
/// let grid: SolvedGrid = "
///     534 678 912
///     672 195 348
///     198 342 567
///     859 761 423
///     426 853 791
///     713 924 856
///     961 537 284
///     287 419 635
///     345 286 179
/// "
/// .parse()?;
///
/// assert!(grid.is_valid());
/// assert_eq!(grid.to_array()[0], [5, 3, 4, 6, 7, 8, 9, 1, 2]);
/// # Ok::<(), gridoku_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGrid {
    cells: [Digit; 81],
}

impl SolvedGrid {
    pub(crate) const fn from_cells(cells: [Digit; 81]) -> Self {
        Self { cells }
    }

    /// Builds a grid from a 9x9 value array of digits 1-9.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ValueOutOfRange`] for values above 9 and
    /// [`GridError::IncompleteGrid`] for zeros.
    pub fn from_array(values: [[u8; 9]; 9]) -> Result<Self, GridError> {
        Self::try_from(&DigitGrid::from_array(values)?)
    }

    /// The digit at `pos`.
    #[must_use]
    #[inline]
    pub const fn get(&self, pos: Position) -> Digit {
        self.cells[pos.index()]
    }

    /// Returns the board as a 9x9 value array; every value is in 1-9.
    #[must_use]
    pub fn to_array(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::ALL {
            values[usize::from(pos.row())][usize::from(pos.col())] = self.get(pos).value();
        }
        values
    }

    /// The same board with every cell fixed, as a [`DigitGrid`].
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, Some(self.get(pos)));
        }
        grid
    }

    /// Whether every house holds each digit exactly once.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        House::ALL.iter().all(|house| {
            let seen: DigitSet = house
                .positions()
                .into_iter()
                .map(|pos| self.get(pos))
                .collect();
            seen == DigitSet::FULL
        })
    }

    /// Whether this board extends `puzzle`: every fixed cell of the puzzle
    /// keeps its value.
    #[must_use]
    pub fn extends(&self, puzzle: &DigitGrid) -> bool {
        puzzle
            .givens()
            .all(|(pos, digit)| self.get(pos) == digit)
    }
}

impl TryFrom<&DigitGrid> for SolvedGrid {
    type Error = GridError;

    fn try_from(grid: &DigitGrid) -> Result<Self, Self::Error> {
        let mut cells = [Digit::D1; 81];
        for pos in Position::ALL {
            cells[pos.index()] = grid[pos].ok_or(GridError::IncompleteGrid { pos })?;
        }
        Ok(Self { cells })
    }
}

impl FromStr for SolvedGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(&DigitGrid::from_str(s)?)
    }
}

impl fmt::Display for SolvedGrid {
    /// Renders the board in the same block-separated format as
    /// [`DigitGrid`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_digit_grid(), f)
    }
}

impl Index<Position> for SolvedGrid {
    type Output = Digit;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}
