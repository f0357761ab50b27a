use gridoku_core::peers_of;
use log::trace;

use crate::{
    Contradiction, WorkGrid,
    rule::{BoxedRule, Rule},
};

const NAME: &str = "peer elimination";

/// Propagates decided cells to their peers.
///
/// Drains the work queue: a decided cell's digit is removed from all 20
/// cells sharing a house with it. A peer left with one candidate is a naked
/// single; deciding it requeues it, so chains of forced cells resolve
/// within a single application.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeerElimination {}

impl PeerElimination {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for PeerElimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut WorkGrid) -> Result<bool, Contradiction> {
        let mut changed = false;
        while let Some(pos) = grid.pop_queued() {
            let Some(digit) = grid.decided_at(pos) else {
                debug_assert!(false, "queued cell {pos} is not decided");
                continue;
            };
            for peer in peers_of(pos) {
                if grid.eliminate(peer, digit)? {
                    changed = true;
                }
            }
            trace!("eliminated {digit} from the peers of {pos}");
        }
        Ok(changed)
    }
}
