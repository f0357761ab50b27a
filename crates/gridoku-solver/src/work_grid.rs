use gridoku_core::{CandidateGrid, Digit, DigitGrid, DigitSet, Position};
use tinyvec::ArrayVec;

/// Signal that the current partial assignment cannot be completed.
///
/// Carried on the error rail of propagation so that `?` unwinds straight to
/// the search layer, which treats it as an instruction to backtrack. It is
/// control flow rather than a reportable error and never appears in solving
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction;

/// Solver state for rule application: candidate domains plus the work queue
/// of decided cells whose peers still need updating.
///
/// This type is the only surface rules use to mutate candidates. It keeps
/// the queue honest: [`assign`](Self::assign) enqueues the cell it decides,
/// and [`eliminate`](Self::eliminate) enqueues a cell whose domain shrinks
/// to a single candidate. Each cell can sit in the queue at most once
/// between restores, so the queue never exceeds the 81 cells of the board.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Digit, Position};
/// use gridoku_solver::WorkGrid;
///
/// let mut grid = WorkGrid::new();
/// grid.assign(Position::new(0, 0), Digit::D5);
/// assert!(grid.has_queued());
/// assert_eq!(grid.decided_at(Position::new(0, 0)), Some(Digit::D5));
/// ```
#[derive(Debug, Clone)]
pub struct WorkGrid {
    /// Underlying candidate state.
    candidates: CandidateGrid,
    /// Decided cells whose peer eliminations are still pending.
    queue: ArrayVec<[Position; 81]>,
}

impl Default for WorkGrid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl WorkGrid {
    /// Creates a grid with every candidate open and an empty queue.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: CandidateGrid::new(),
            queue: ArrayVec::new(),
        }
    }

    /// Loads a puzzle: every fixed cell is assigned and queued for
    /// propagation.
    #[must_use]
    pub fn from_puzzle(puzzle: &DigitGrid) -> Self {
        let mut grid = Self::new();
        for (pos, digit) in puzzle.givens() {
            grid.assign(pos, digit);
        }
        grid
    }

    /// The candidates still possible at `pos`.
    #[inline]
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.candidates.candidates_at(pos)
    }

    /// The digit at `pos` if the cell is decided.
    #[inline]
    #[must_use]
    pub fn decided_at(&self, pos: Position) -> Option<Digit> {
        self.candidates.decided_at(pos)
    }

    /// Whether every cell is decided.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.candidates.is_complete()
    }

    /// Read access to the underlying domains, e.g. for snapshotting.
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &CandidateGrid {
        &self.candidates
    }

    /// Replaces the domains wholesale and clears the queue.
    ///
    /// Used when backtracking to a snapshot taken at a propagation
    /// fixpoint, where the queue was empty by definition.
    pub fn restore(&mut self, snapshot: &CandidateGrid) {
        self.candidates.clone_from(snapshot);
        self.queue.clear();
    }

    /// Decides `pos` to `digit` and queues it for peer elimination.
    ///
    /// `digit` must still be a candidate at `pos`.
    pub fn assign(&mut self, pos: Position, digit: Digit) {
        debug_assert!(self.candidates_at(pos).contains(digit));
        self.candidates.assign(pos, digit);
        self.queue.push(pos);
    }

    /// Removes `digit` from the domain at `pos`.
    ///
    /// Returns whether the domain changed. A domain shrinking to a single
    /// candidate queues the cell for peer elimination.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] when the elimination empties the domain.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> Result<bool, Contradiction> {
        if !self.candidates.eliminate(pos, digit) {
            return Ok(false);
        }
        match self.candidates_at(pos).len() {
            0 => Err(Contradiction),
            1 => {
                self.queue.push(pos);
                Ok(true)
            }
            _ => Ok(true),
        }
    }

    /// Takes the next queued cell, if any.
    pub fn pop_queued(&mut self) -> Option<Position> {
        self.queue.pop()
    }

    /// Whether any decided cells await peer elimination.
    #[inline]
    #[must_use]
    pub fn has_queued(&self) -> bool {
        !self.queue.is_empty()
    }
}
