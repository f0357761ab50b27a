//! Solving engine for 9x9 Sudoku boards.
//!
//! # Overview
//!
//! The engine layers a backtracking search on top of rule-based candidate
//! propagation:
//!
//! 1. [`rule`] holds the deduction rules. Each one shrinks candidate sets or
//!    decides cells without ever discarding a solution.
//! 2. [`Propagator`] applies the rules until none of them makes progress.
//! 3. [`Solver`] runs propagation, and where deduction stalls, picks an open
//!    cell, tries its candidates in order, and backtracks on contradiction.
//!
//! Solving is deterministic and total: every call ends in a solution, a
//! proof that none exists, or a configured [`SolveLimits`] stop.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::DigitGrid;
//! use gridoku_solver::Solver;
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
//! let solution = Solver::new()
//!     .solve(&puzzle)
//!     .solution()
//!     .expect("this puzzle is solvable");
//! assert!(solution.is_valid());
//! assert!(solution.extends(&puzzle));
//! # Ok::<(), gridoku_core::GridError>(())
//! ```

pub mod rule;

mod propagator;
mod search;
mod solver;
mod trail;
mod work_grid;

// Re-export commonly used types
pub use self::{
    propagator::{Fixpoint, Propagator},
    solver::{SolveLimits, SolveOutcome, SolveStats, Solver},
    work_grid::{Contradiction, WorkGrid},
};

#[cfg(test)]
mod testing;
