//! Houses and peer relations.

use std::fmt;

use crate::Position;

/// One distinctness constraint of the board: a row, a column, or a 3x3
/// block. Every house holds exactly nine cells, and a solved board carries
/// each digit exactly once per house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3x3 block identified by its index (0-8, left to right, top to
    /// bottom).
    Block {
        /// Block index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = [
        Self::Row { row: 0 },
        Self::Row { row: 1 },
        Self::Row { row: 2 },
        Self::Row { row: 3 },
        Self::Row { row: 4 },
        Self::Row { row: 5 },
        Self::Row { row: 6 },
        Self::Row { row: 7 },
        Self::Row { row: 8 },
    ];

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = [
        Self::Column { col: 0 },
        Self::Column { col: 1 },
        Self::Column { col: 2 },
        Self::Column { col: 3 },
        Self::Column { col: 4 },
        Self::Column { col: 5 },
        Self::Column { col: 6 },
        Self::Column { col: 7 },
        Self::Column { col: 8 },
    ];

    /// Array containing all blocks (0-8).
    pub const BLOCKS: [Self; 9] = [
        Self::Block { index: 0 },
        Self::Block { index: 1 },
        Self::Block { index: 2 },
        Self::Block { index: 3 },
        Self::Block { index: 4 },
        Self::Block { index: 5 },
        Self::Block { index: 6 },
        Self::Block { index: 7 },
        Self::Block { index: 8 },
    ];

    /// Array containing all houses in row, column, block order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Block { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the nine cells of this house in reading order.
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        let mut cells = [Position::new(0, 0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            let cell = i as u8;
            cells[i] = match self {
                Self::Row { row } => Position::new(row, cell),
                Self::Column { col } => Position::new(cell, col),
                Self::Block { index } => Position::from_block(index, cell),
            };
            i += 1;
        }
        cells
    }

    /// Whether this house contains `pos`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row { row } => pos.row() == row,
            Self::Column { col } => pos.col() == col,
            Self::Block { index } => pos.block_index() == index,
        }
    }
}

impl fmt::Display for House {
    /// Formats the house with a 1-based index, e.g. `row 4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Row { row } => write!(f, "row {}", row + 1),
            Self::Column { col } => write!(f, "column {}", col + 1),
            Self::Block { index } => write!(f, "block {}", index + 1),
        }
    }
}

/// Returns the three houses containing `pos`: its row, its column, and its
/// block.
#[must_use]
#[inline]
pub const fn houses_of(pos: Position) -> [House; 3] {
    [
        House::Row { row: pos.row() },
        House::Column { col: pos.col() },
        House::Block {
            index: pos.block_index(),
        },
    ]
}

/// Returns the 20 cells sharing a house with `pos`, in row-major order.
#[must_use]
#[inline]
pub const fn peers_of(pos: Position) -> [Position; 20] {
    PEERS[pos.index()]
}

const PEERS: [[Position; 20]; 81] = {
    let mut table = [[Position::new(0, 0); 20]; 81];
    let mut i = 0;
    while i < 81 {
        let pos = Position::ALL[i];
        let mut count = 0;
        let mut j = 0;
        while j < 81 {
            let other = Position::ALL[j];
            if pos.sees(other) {
                table[i][count] = other;
                count += 1;
            }
            j += 1;
        }
        assert!(count == 20);
        i += 1;
    }
    table
};
