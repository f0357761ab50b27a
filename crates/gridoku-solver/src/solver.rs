use std::{collections::HashMap, time::Instant};

use derive_more::{Display, IsVariant};
use gridoku_core::{DigitGrid, SolvedGrid};
use log::debug;

use crate::{
    Propagator, WorkGrid,
    rule::BoxedRule,
    search::{self, SearchOutcome},
};

/// Result of a solve call.
///
/// `Unsatisfiable` is a legitimate answer, not an error: the puzzle has no
/// completion. `LimitReached` means a configured limit stopped the search
/// before it could prove either of the other outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Display, IsVariant)]
pub enum SolveOutcome {
    /// A complete, valid board extending the puzzle's fixed cells.
    #[display("solved")]
    Solved(SolvedGrid),
    /// No assignment of the open cells satisfies every house.
    #[display("unsatisfiable")]
    Unsatisfiable,
    /// A limit from [`SolveLimits`] stopped the search first.
    #[display("limit reached")]
    LimitReached,
}

impl SolveOutcome {
    /// The solution, if one was found.
    #[must_use]
    pub fn solution(self) -> Option<SolvedGrid> {
        match self {
            Self::Solved(grid) => Some(grid),
            Self::Unsatisfiable | Self::LimitReached => None,
        }
    }
}

/// Cooperative bounds on a solve call.
///
/// Limits are checked between branch attempts, so propagation is never
/// interrupted and hitting a limit leaves no half-applied state. A puzzle
/// that propagation alone finishes can therefore still be solved under a
/// zero decision budget.
///
/// # Examples
///
/// ```
/// use gridoku_solver::SolveLimits;
///
/// let limits = SolveLimits::none().with_max_decisions(10_000);
/// assert_eq!(limits.max_decisions, Some(10_000));
/// assert_eq!(limits.deadline, None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveLimits {
    /// Maximum number of trial assignments, `None` for unlimited.
    pub max_decisions: Option<u64>,
    /// Wall-clock cutoff, `None` for unlimited.
    pub deadline: Option<Instant>,
}

impl SolveLimits {
    /// No limits; the search runs to an answer.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_decisions: None,
            deadline: None,
        }
    }

    /// Caps the number of trial assignments.
    #[must_use]
    pub fn with_max_decisions(mut self, max: u64) -> Self {
        self.max_decisions = Some(max);
        self
    }

    /// Stops the search once `deadline` has passed.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub(crate) fn exceeded(&self, decisions: u64) -> bool {
        if let Some(max) = self.max_decisions
            && decisions >= max
        {
            return true;
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return true;
        }
        false
    }
}

/// Counters collected during a solve.
///
/// # Examples
///
/// ```
/// use gridoku_core::DigitGrid;
/// use gridoku_solver::Solver;
///
/// let (outcome, stats) = Solver::new().solve_with_stats(&DigitGrid::new());
/// assert!(outcome.is_solved());
/// // An empty board cannot be finished by deduction alone.
/// assert!(stats.decisions > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    /// Successful applications per rule name.
    pub rule_applications: HashMap<&'static str, u64>,
    /// Trial assignments made by the search.
    pub decisions: u64,
    /// Contradictions that forced the search to undo work.
    pub backtracks: u64,
}

impl SolveStats {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of times the rule named `name` was applied.
    #[must_use]
    pub fn rule_count(&self, name: &str) -> u64 {
        self.rule_applications.get(name).copied().unwrap_or(0)
    }

    /// Total rule applications across the whole solve.
    #[must_use]
    pub fn total_applications(&self) -> u64 {
        self.rule_applications.values().sum()
    }

    pub(crate) fn record_rule(&mut self, name: &'static str) {
        *self.rule_applications.entry(name).or_default() += 1;
    }
}

/// The solving facade: propagation to a fixpoint, then backtracking search.
///
/// A `Solver` holds only configuration and can be reused across puzzles;
/// every call owns its working state, so independent solves share nothing.
/// Solving is deterministic: the same puzzle always produces the same
/// outcome and statistics.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Digit, DigitGrid, Position};
/// use gridoku_solver::Solver;
///
/// let puzzle: DigitGrid = "
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
/// let outcome = Solver::new().solve(&puzzle);
/// let solution = outcome.solution().expect("this puzzle is solvable");
/// assert_eq!(solution.get(Position::new(0, 2)), Digit::D4);
/// # Ok::<(), gridoku_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    propagator: Propagator,
    limits: SolveLimits,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with the default rules and no limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            propagator: Propagator::with_default_rules(),
            limits: SolveLimits::none(),
        }
    }

    /// Creates a solver with a custom propagator.
    #[must_use]
    pub fn with_propagator(propagator: Propagator) -> Self {
        Self {
            propagator,
            limits: SolveLimits::none(),
        }
    }

    /// Sets the limits applied to subsequent solves.
    #[must_use]
    pub fn with_limits(mut self, limits: SolveLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The deduction rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        self.propagator.rules()
    }

    /// Solves `puzzle`.
    ///
    /// Returns the first solution in the engine's deterministic exploration
    /// order. Puzzles with several completions yield one of them, always
    /// the same one.
    #[must_use]
    pub fn solve(&self, puzzle: &DigitGrid) -> SolveOutcome {
        self.solve_with_stats(puzzle).0
    }

    /// Solves `puzzle` and reports the counters the run produced.
    #[must_use]
    pub fn solve_with_stats(&self, puzzle: &DigitGrid) -> (SolveOutcome, SolveStats) {
        let mut stats = SolveStats::new();
        debug!("solving a puzzle with {} fixed cells", puzzle.given_count());

        // Duplicated fixed cells can never be completed; skip the search.
        if let Some(conflict) = puzzle.first_conflict() {
            debug!("fixed cells already conflict: {conflict}");
            return (SolveOutcome::Unsatisfiable, stats);
        }

        let grid = WorkGrid::from_puzzle(puzzle);
        let outcome = match search::search(&self.propagator, grid, &self.limits, &mut stats) {
            SearchOutcome::Solved(candidates) => {
                let Some(solution) = candidates.to_solved() else {
                    unreachable!("a solved search state must convert to a complete board");
                };
                debug_assert!(solution.is_valid());
                debug_assert!(solution.extends(puzzle));
                SolveOutcome::Solved(solution)
            }
            SearchOutcome::Exhausted => SolveOutcome::Unsatisfiable,
            SearchOutcome::LimitReached => SolveOutcome::LimitReached,
        };

        debug!(
            "finished: {outcome} ({} decisions, {} backtracks, {} rule applications)",
            stats.decisions,
            stats.backtracks,
            stats.total_applications(),
        );
        (outcome, stats)
    }
}
