//! Puzzle grids of fixed digits and blanks.

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, House, Position};

/// Error constructing a grid from external input.
///
/// These cover malformed input only. A well-formed puzzle that happens to
/// have no solution is not an error; solving reports it as unsatisfiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The text contained a character that is neither a digit, a blank
    /// marker, nor whitespace.
    #[display("unexpected character {character:?} in grid text")]
    UnexpectedCharacter {
        /// The rejected character.
        character: char,
    },
    /// The input did not provide exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cells the input provided.
        count: usize,
    },
    /// A cell value was outside the range 0-9.
    #[display("value {value} at {pos} is outside the range 0-9")]
    ValueOutOfRange {
        /// The offending cell.
        pos: Position,
        /// The rejected value.
        value: u8,
    },
    /// A grid that must be complete still had a blank cell.
    #[display("blank cell at {pos} in a grid required to be complete")]
    IncompleteGrid {
        /// The first blank cell in row-major order.
        pos: Position,
    },
}

/// A duplicated digit among the fixed cells of a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("duplicate {digit} in {house}")]
pub struct Conflict {
    /// The house holding the duplicate.
    pub house: House,
    /// The duplicated digit.
    pub digit: Digit,
}

/// A 9x9 puzzle grid where each cell is either a fixed digit or blank.
///
/// This is the input form of a board; the solving representation is
/// [`CandidateGrid`](crate::CandidateGrid). Construction accepts any
/// combination of digits and blanks. Whether the fixed cells contradict
/// each other is a separate question answered by
/// [`first_conflict`](Self::first_conflict).
///
/// # Text format
///
/// A grid parses from exactly 81 significant characters: `1`-`9` for fixed
/// digits and `.`, `_`, or `0` for blanks. Whitespace is ignored, so grids
/// can be laid out in rows. [`Display`](#impl-Display-for-DigitGrid) renders
/// the grid as a block-separated board.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 2)], None);
/// assert_eq!(grid.given_count(), 30);
/// assert!(grid.first_conflict().is_none());
/// # Ok::<(), gridoku_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an all-blank grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Builds a grid from a 9x9 value array, 0 meaning blank.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ValueOutOfRange`] if any value is above 9.
    pub fn from_array(values: [[u8; 9]; 9]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let value = values[usize::from(pos.row())][usize::from(pos.col())];
            grid.cells[pos.index()] = match value {
                0 => None,
                _ => Some(
                    Digit::try_from_value(value)
                        .ok_or(GridError::ValueOutOfRange { pos, value })?,
                ),
            };
        }
        Ok(grid)
    }

    /// Returns the grid as a 9x9 value array, blanks as 0.
    #[must_use]
    pub fn to_array(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for (pos, digit) in self.givens() {
            values[usize::from(pos.row())][usize::from(pos.col())] = digit.value();
        }
        values
    }

    /// The fixed digit at `pos`, or `None` when the cell is blank.
    #[must_use]
    #[inline]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Fixes or clears the cell at `pos`.
    #[inline]
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Iterates over the fixed cells as `(Position, Digit)` pairs in
    /// row-major order.
    pub fn givens(&self) -> impl Iterator<Item = (Position, Digit)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(|pos| self.get(pos).map(|digit| (pos, digit)))
    }

    /// Number of fixed cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Whether every cell is fixed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Finds a duplicated digit among the fixed cells of some house.
    ///
    /// Houses are scanned in [`House::ALL`] order and each house in reading
    /// order, so the reported conflict is deterministic. `None` means the
    /// fixed cells are mutually consistent, which does not by itself mean
    /// the puzzle is solvable.
    #[must_use]
    pub fn first_conflict(&self) -> Option<Conflict> {
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in house.positions() {
                if let Some(digit) = self.get(pos) {
                    if seen.contains(digit) {
                        return Some(Conflict { house, digit });
                    }
                    seen.insert(digit);
                }
            }
        }
        None
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl FromStr for DigitGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '.' | '_' | '0' => None,
                '1' => Some(Digit::D1),
                '2' => Some(Digit::D2),
                '3' => Some(Digit::D3),
                '4' => Some(Digit::D4),
                '5' => Some(Digit::D5),
                '6' => Some(Digit::D6),
                '7' => Some(Digit::D7),
                '8' => Some(Digit::D8),
                '9' => Some(Digit::D9),
                _ => return Err(GridError::UnexpectedCharacter { character: c }),
            };
            if count < 81 {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    /// Renders the grid as a block-separated board, e.g.
    ///
    /// ```text
    /// 5 3 . | . 7 . | . . .
    /// 6 . . | 1 9 5 | . . .
    /// . 9 8 | . . . | . 6 .
    /// ------+-------+------
    /// 8 . . | . 6 . | . . 3
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row != 0 {
                writeln!(f)?;
                if row % 3 == 0 {
                    writeln!(f, "------+-------+------")?;
                }
            }
            for col in 0..9 {
                if col != 0 {
                    write!(f, " ")?;
                    if col % 3 == 0 {
                        write!(f, "| ")?;
                    }
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const CLASSIC: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    #[test]
    fn test_parse_accepts_all_blank_markers() {
        let dots: DigitGrid = ".".repeat(81).parse().unwrap();
        let underscores: DigitGrid = "_".repeat(81).parse().unwrap();
        let zeros: DigitGrid = "0".repeat(81).parse().unwrap();
        assert_eq!(dots, DigitGrid::new());
        assert_eq!(underscores, dots);
        assert_eq!(zeros, dots);
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        let packed: DigitGrid = CLASSIC
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .parse()
            .unwrap();
        assert_eq!(grid, packed);
        assert_eq!(grid.given_count(), 30);
        assert_eq!(grid[Position::new(1, 3)], Some(Digit::D1));
    }

    #[test]
    fn test_parse_rejects_unexpected_character() {
        let err = "x".repeat(81).parse::<DigitGrid>().unwrap_err();
        assert_eq!(err, GridError::UnexpectedCharacter { character: 'x' });
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        let err = ".".repeat(80).parse::<DigitGrid>().unwrap_err();
        assert_eq!(err, GridError::WrongCellCount { count: 80 });
        let err = ".".repeat(82).parse::<DigitGrid>().unwrap_err();
        assert_eq!(err, GridError::WrongCellCount { count: 82 });
        let err = "".parse::<DigitGrid>().unwrap_err();
        assert_eq!(err, GridError::WrongCellCount { count: 0 });
    }

    #[test]
    fn test_from_array_rejects_out_of_range() {
        let mut values = [[0; 9]; 9];
        values[2][3] = 10;
        let err = DigitGrid::from_array(values).unwrap_err();
        assert_eq!(
            err,
            GridError::ValueOutOfRange {
                pos: Position::new(2, 3),
                value: 10,
            }
        );
    }

    #[test]
    fn test_array_round_trip() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        let values = grid.to_array();
        assert_eq!(values[0], [5, 3, 0, 0, 7, 0, 0, 0, 0]);
        assert_eq!(DigitGrid::from_array(values).unwrap(), grid);
    }

    #[test]
    fn test_set_and_completeness() {
        let mut grid = DigitGrid::new();
        assert!(!grid.is_complete());
        for pos in Position::ALL {
            grid.set(pos, Some(Digit::D1));
        }
        assert!(grid.is_complete());
        grid.set(Position::new(8, 8), None);
        assert!(!grid.is_complete());
        assert_eq!(grid.given_count(), 80);
    }

    #[test]
    fn test_first_conflict_in_each_house_family() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(3, 0), Some(Digit::D4));
        grid.set(Position::new(3, 8), Some(Digit::D4));
        let conflict = grid.first_conflict().unwrap();
        assert_eq!(conflict.house, House::Row { row: 3 });
        assert_eq!(conflict.digit, Digit::D4);

        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 6), Some(Digit::D9));
        grid.set(Position::new(8, 6), Some(Digit::D9));
        let conflict = grid.first_conflict().unwrap();
        assert_eq!(conflict.house, House::Column { col: 6 });

        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Some(Digit::D5));
        grid.set(Position::new(1, 1), Some(Digit::D5));
        let conflict = grid.first_conflict().unwrap();
        assert_eq!(conflict.house, House::Block { index: 0 });
        assert_eq!(conflict.to_string(), "duplicate 5 in block 1");
    }

    #[test]
    fn test_no_conflict_on_consistent_grid() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        assert!(grid.first_conflict().is_none());
        assert!(DigitGrid::new().first_conflict().is_none());
    }

    #[test]
    fn test_display_block_format() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        let expected = "\
            5 3 . | . 7 . | . . .\n\
            6 . . | 1 9 5 | . . .\n\
            . 9 8 | . . . | . 6 .\n\
            ------+-------+------\n\
            8 . . | . 6 . | . . 3\n\
            4 . . | 8 . 3 | . . 1\n\
            7 . . | . 2 . | . . 6\n\
            ------+-------+------\n\
            . 6 . | . . . | 2 8 .\n\
            . . . | 4 1 9 | . . 5\n\
            . . . | . 8 . | . 7 9";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GridError::UnexpectedCharacter { character: 'x' }.to_string(),
            "unexpected character 'x' in grid text"
        );
        assert_eq!(
            GridError::WrongCellCount { count: 80 }.to_string(),
            "expected 81 cells, found 80"
        );
        assert_eq!(
            GridError::ValueOutOfRange {
                pos: Position::new(2, 3),
                value: 10,
            }
            .to_string(),
            "value 10 at r3c4 is outside the range 0-9"
        );
        assert_eq!(
            GridError::IncompleteGrid {
                pos: Position::new(0, 0),
            }
            .to_string(),
            "blank cell at r1c1 in a grid required to be complete"
        );
    }

    #[test]
    fn test_errors_have_no_source() {
        let errors = [
            GridError::UnexpectedCharacter { character: 'x' },
            GridError::WrongCellCount { count: 80 },
            GridError::ValueOutOfRange {
                pos: Position::new(2, 3),
                value: 10,
            },
            GridError::IncompleteGrid {
                pos: Position::new(0, 0),
            },
        ];
        for err in errors {
            assert!(
                std::error::Error::source(&err).is_none(),
                "{err} should carry no source",
            );
        }
    }

    proptest! {
        #[test]
        fn display_round_trips_through_parse(cells in proptest::collection::vec(0u8..=9, 81)) {
            let mut values = [[0u8; 9]; 9];
            for (i, &value) in cells.iter().enumerate() {
                values[i / 9][i % 9] = value;
            }
            let grid = DigitGrid::from_array(values).unwrap();
            let reparsed: DigitGrid = grid.to_string().parse().unwrap();
            prop_assert_eq!(&reparsed, &grid);
            prop_assert_eq!(grid.to_array(), values);
        }
    }
}
