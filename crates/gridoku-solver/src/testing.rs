//! Shared fixtures for the crate's tests.

use gridoku_core::{DigitGrid, SolvedGrid};

/// A well-known puzzle with a unique solution, 30 fixed cells.
pub(crate) const CLASSIC: &str = "
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

/// The unique solution of [`CLASSIC`].
pub(crate) const CLASSIC_SOLUTION: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// The first three rows of [`CLASSIC`] with the rest left blank.
///
/// Too few fixed cells for deduction alone, so solving it exercises the
/// branching search.
pub(crate) const SPARSE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
";

/// Parses a grid literal, panicking on malformed input.
#[track_caller]
pub(crate) fn grid(text: &str) -> DigitGrid {
    text.parse().expect("fixture grid must parse")
}

/// Asserts that `solution` is a valid board that keeps every fixed cell of
/// `puzzle`.
#[track_caller]
pub(crate) fn assert_valid_solution(puzzle: &DigitGrid, solution: &SolvedGrid) {
    assert!(solution.is_valid(), "solution violates a house:\n{solution}");
    assert!(
        solution.extends(puzzle),
        "solution changed a fixed cell:\npuzzle:\n{puzzle}\nsolution:\n{solution}"
    );
}
