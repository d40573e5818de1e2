use thiserror::Error;

use crate::engine::EmptyDomain;
use crate::propagation::PropagatorId;

/// The result of invoking a propagator. The propagation either reaches a (local) fixpoint or
/// finds the current search node to be infeasible.
pub type PropagationStatusCP = Result<(), Contradiction>;

/// Signals that the current search node cannot be extended to a solution.
///
/// A contradiction is ordinary control flow: it travels from the domain or propagator which
/// detected it, through the propagation engine, up to the search loop, which turns it into a
/// backtrack.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contradiction {
    /// A narrowing operation would have emptied a domain.
    #[error("a domain became empty")]
    EmptyDomain,
    /// A propagator found the constraint to be violated without emptying a domain.
    #[error("propagator {0} detected an inconsistency")]
    Propagator(PropagatorId),
}

impl From<EmptyDomain> for Contradiction {
    fn from(_: EmptyDomain) -> Self {
        Contradiction::EmptyDomain
    }
}
