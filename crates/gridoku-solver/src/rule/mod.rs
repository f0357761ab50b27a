//! Deduction rules that shrink candidate domains.
//!
//! Every rule is sound: it only removes candidates no completion of the
//! current grid could use and only decides cells whose value is forced.
//! Rules never guess; guessing is the job of the search.
//!
//! # Examples
//!
//! ```
//! use gridoku_solver::rule;
//!
//! let rules = rule::default_rules();
//! assert_eq!(rules.len(), 2);
//! assert_eq!(rules[0].name(), "peer elimination");
//! assert_eq!(rules[1].name(), "only position");
//! ```

use std::fmt::Debug;

use crate::{Contradiction, WorkGrid};

pub use self::{only_position::OnlyPosition, peer_elimination::PeerElimination};

mod only_position;
mod peer_elimination;

/// Returns the rule set a fresh propagator runs, cheapest first.
#[must_use]
pub fn default_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(PeerElimination::new()),
        Box::new(OnlyPosition::new()),
    ]
}

/// A deduction rule over candidate domains.
pub trait Rule: Debug {
    /// Short name used in statistics and logs.
    fn name(&self) -> &'static str;

    /// Clones the rule into a box.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule until it has nothing more to contribute, returning
    /// whether any domain changed.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if the rule proves the grid infeasible.
    fn apply(&self, grid: &mut WorkGrid) -> Result<bool, Contradiction>;
}

/// A heap-allocated, dynamically typed [`Rule`].
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
