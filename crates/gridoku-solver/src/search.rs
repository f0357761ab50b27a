use gridoku_core::{CandidateGrid, Position};
use log::trace;

use crate::{
    Contradiction, Fixpoint, Propagator, SolveLimits, SolveStats, WorkGrid,
    trail::{Frame, Trail},
};

/// Terminal state of a search run.
#[derive(Debug)]
pub(crate) enum SearchOutcome {
    /// Every cell decided without contradiction.
    Solved(CandidateGrid),
    /// The whole assignment tree was explored and rejected.
    Exhausted,
    /// A configured limit stopped the search first.
    LimitReached,
}

/// Depth-first search over branch assignments, interleaved with
/// propagation.
///
/// Each iteration propagates to a fixpoint. A complete fixpoint is a
/// solution. A partial fixpoint opens a new frame on the trail: its domain
/// snapshot is taken here, while the queue is empty. A contradiction moves
/// on to the retry loop, which restores the deepest frame's snapshot and
/// tries its next candidate, popping frames whose candidates are spent.
/// Limits are checked between branch attempts, never inside propagation.
pub(crate) fn search(
    propagator: &Propagator,
    mut grid: WorkGrid,
    limits: &SolveLimits,
    stats: &mut SolveStats,
) -> SearchOutcome {
    let mut trail = Trail::new();

    loop {
        match propagator.run(&mut grid, stats) {
            Ok(Fixpoint::Complete) => {
                return SearchOutcome::Solved(grid.candidates().clone());
            }
            Ok(Fixpoint::Partial) => match select_branch_cell(&grid) {
                Some(cell) => {
                    trace!(
                        "branching on {cell} with {:?} at depth {}",
                        grid.candidates_at(cell),
                        trail.depth(),
                    );
                    trail.push(Frame::new(grid.candidates().clone(), cell));
                }
                None => unreachable!("a partial fixpoint always leaves a branchable cell"),
            },
            Err(Contradiction) => {
                stats.backtracks += 1;
                trace!("contradiction at depth {}", trail.depth());
            }
        }

        // Try the next candidate at the deepest frame that still has one.
        loop {
            let Some(frame) = trail.top_mut() else {
                return SearchOutcome::Exhausted;
            };
            if let Some(digit) = frame.untried().smallest() {
                if limits.exceeded(stats.decisions) {
                    return SearchOutcome::LimitReached;
                }
                frame.tried.insert(digit);
                let cell = frame.cell;
                grid.restore(&frame.snapshot);
                grid.assign(cell, digit);
                stats.decisions += 1;
                trace!("decision {}: {digit} at {cell}", stats.decisions);
                break;
            }
            trail.pop();
        }
    }
}

/// Picks the open cell with the fewest candidates, scanning row-major so
/// ties resolve to the lowest row, then the lowest column.
fn select_branch_cell(grid: &WorkGrid) -> Option<Position> {
    let mut best = None;
    let mut best_len = usize::MAX;
    for pos in Position::ALL {
        let len = grid.candidates_at(pos).len();
        if len > 1 && len < best_len {
            best = Some(pos);
            best_len = len;
        }
    }
    best
}
