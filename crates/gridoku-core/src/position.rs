//! Cell coordinates on the 9x9 board.

use std::fmt;

/// A cell coordinate: row 0-8 top to bottom, column 0-8 left to right.
///
/// Positions are cheap to copy and order row-major, which is also the order
/// every deterministic scan in the engine uses.
///
/// # Examples
///
/// ```
/// use gridoku_core::Position;
///
/// let pos = Position::new(3, 7);
/// assert_eq!(pos.row(), 3);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.index(), 34);
/// assert_eq!(pos.block_index(), 5);
/// assert_eq!(pos.to_string(), "r4c8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "row index out of range 0-8");
        assert!(col < 9, "column index out of range 0-8");
        Self { row, col }
    }

    /// Creates a position from a block index and a cell index within the
    /// block, both in reading order.
    ///
    /// # Panics
    ///
    /// Panics if `block` or `cell` is not in the range 0-8.
    #[must_use]
    pub const fn from_block(block: u8, cell: u8) -> Self {
        assert!(block < 9, "block index out of range 0-8");
        assert!(cell < 9, "cell index out of range 0-8");
        Self {
            row: (block / 3) * 3 + cell / 3,
            col: (block % 3) * 3 + cell % 3,
        }
    }

    /// Row index, 0-8.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index, 0-8.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major cell index, 0-80.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Index of the 3x3 block containing this cell, 0-8 in reading order.
    #[must_use]
    pub const fn block_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Whether `other` shares a row, column, or block with this cell.
    ///
    /// A cell does not see itself.
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        self.row == other.row
            || self.col == other.col
            || self.block_index() == other.block_index()
    }
}

impl fmt::Display for Position {
    /// Formats the position in 1-based `rXcY` notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    #[should_panic(expected = "row index out of range 0-8")]
    fn test_new_rejects_large_row() {
        let _ = Position::new(9, 0);
    }

    #[test]
    #[should_panic(expected = "column index out of range 0-8")]
    fn test_new_rejects_large_column() {
        let _ = Position::new(0, 9);
    }

    #[test]
    fn test_block_index() {
        assert_eq!(Position::new(0, 0).block_index(), 0);
        assert_eq!(Position::new(2, 5).block_index(), 1);
        assert_eq!(Position::new(4, 4).block_index(), 4);
        assert_eq!(Position::new(8, 8).block_index(), 8);
        assert_eq!(Position::new(6, 2).block_index(), 6);
    }

    #[test]
    fn test_from_block_round_trip() {
        for block in 0..9 {
            for cell in 0..9 {
                let pos = Position::from_block(block, cell);
                assert_eq!(pos.block_index(), block);
            }
        }
        assert_eq!(Position::from_block(4, 0), Position::new(3, 3));
        assert_eq!(Position::from_block(8, 8), Position::new(8, 8));
    }

    #[test]
    fn test_sees() {
        let pos = Position::new(4, 4);
        assert!(!pos.sees(pos));
        assert!(pos.sees(Position::new(4, 0)));
        assert!(pos.sees(Position::new(0, 4)));
        assert!(pos.sees(Position::new(3, 5)));
        assert!(!pos.sees(Position::new(0, 0)));

        // Symmetry over the whole board.
        for a in Position::ALL {
            for b in Position::ALL {
                assert_eq!(a.sees(b), b.sees(a));
            }
        }
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "r1c1");
        assert_eq!(Position::new(8, 8).to_string(), "r9c9");
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut sorted = Position::ALL;
        sorted.sort_unstable();
        assert_eq!(sorted, Position::ALL);
    }
}
