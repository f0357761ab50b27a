//! Core board types for the Gridoku solving engine.
//!
//! This crate provides the data structures a Sudoku solver works over:
//! puzzle input, per-cell candidate domains, and completed boards. The
//! deduction rules and search live in `gridoku-solver`; everything here is
//! plain state with cheap, deterministic operations.
//!
//! # Overview
//!
//! The crate is organized around three layers:
//!
//! 1. **Scalar types** - Values and coordinates
//!    - [`digit`]: Type-safe digits 1-9
//!    - [`digit_set`]: Bitmask sets of digits
//!    - [`position`]: Row/column cell coordinates
//!
//! 2. **Constraint structure** - How cells relate
//!    - [`house`]: Rows, columns, and 3x3 blocks, plus the peer relation
//!      between cells sharing a house
//!
//! 3. **Boards** - Whole-grid states
//!    - [`digit_grid`]: Puzzles of fixed digits and blanks, with text
//!      parsing and rendering
//!    - [`candidate_grid`]: Candidate domains for every cell
//!    - [`solved_grid`]: Completed boards
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{CandidateGrid, Digit, DigitGrid, Position};
//!
//! let puzzle: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let domains = CandidateGrid::from_digit_grid(&puzzle);
//! assert_eq!(domains.decided_at(Position::new(0, 0)), Some(Digit::D5));
//! assert_eq!(domains.candidates_at(Position::new(0, 2)).len(), 9);
//! # Ok::<(), gridoku_core::GridError>(())
//! ```

pub mod candidate_grid;
pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod house;
pub mod position;
pub mod solved_grid;

// Re-export commonly used types
pub use self::{
    candidate_grid::CandidateGrid,
    digit::Digit,
    digit_grid::{Conflict, DigitGrid, GridError},
    digit_set::DigitSet,
    house::{House, houses_of, peers_of},
    position::Position,
    solved_grid::SolvedGrid,
};
