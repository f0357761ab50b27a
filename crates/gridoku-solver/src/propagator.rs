use log::trace;

use crate::{
    Contradiction, SolveStats, WorkGrid,
    rule::{self, BoxedRule},
};

/// Terminal state of a propagation run that found no contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixpoint {
    /// Every cell is decided; the grid is solved.
    Complete,
    /// No rule can make further progress, but open cells remain.
    Partial,
}

/// Applies a list of deduction rules to a [`WorkGrid`] until nothing
/// changes.
///
/// Rules are tried in order and whenever one reports progress the next pass
/// starts over from the first rule, so cheap rules absorb the fallout of
/// expensive ones. Each pass strictly shrinks the total candidate count,
/// which bounds the number of passes.
///
/// # Examples
///
/// ```
/// use gridoku_solver::{Fixpoint, Propagator, SolveStats, WorkGrid};
///
/// let propagator = Propagator::with_default_rules();
/// let mut grid = WorkGrid::new();
/// let mut stats = SolveStats::new();
///
/// // An empty board gives the rules nothing to conclude.
/// let fixpoint = propagator.run(&mut grid, &mut stats)?;
/// assert_eq!(fixpoint, Fixpoint::Partial);
/// assert_eq!(stats.total_applications(), 0);
/// # Ok::<(), gridoku_solver::Contradiction>(())
/// ```
#[derive(Debug, Clone)]
pub struct Propagator {
    rules: Vec<BoxedRule>,
}

impl Propagator {
    /// Creates a propagator with the given rules.
    ///
    /// Rules are applied in the order they appear in the vector.
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates a propagator with [`rule::default_rules`].
    #[must_use]
    pub fn with_default_rules() -> Self {
        Self::new(rule::default_rules())
    }

    /// The rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Applies the first rule that makes progress.
    ///
    /// Returns `Ok(true)` when a rule changed some domain and `Ok(false)`
    /// when the grid is at a fixpoint of this rule set.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if a rule proves the grid infeasible.
    pub fn step(
        &self,
        grid: &mut WorkGrid,
        stats: &mut SolveStats,
    ) -> Result<bool, Contradiction> {
        for rule in &self.rules {
            if rule.apply(grid)? {
                trace!("{} made progress", rule.name());
                stats.record_rule(rule.name());
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Runs [`step`](Self::step) until the rule set is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if the grid is proven infeasible.
    pub fn run(
        &self,
        grid: &mut WorkGrid,
        stats: &mut SolveStats,
    ) -> Result<Fixpoint, Contradiction> {
        while self.step(grid, stats)? {}
        if grid.is_complete() {
            Ok(Fixpoint::Complete)
        } else {
            Ok(Fixpoint::Partial)
        }
    }
}
