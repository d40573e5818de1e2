mod constraint_operation_error;
mod propagation_status_cp;
mod random;
mod solution;
mod trail;

pub use constraint_operation_error::ConstraintOperationError;
pub use propagation_status_cp::Contradiction;
pub use propagation_status_cp::PropagationStatusCP;
pub use random::Random;
pub use solution::ProblemSolution;
pub use solution::Solution;
pub use solution::SolutionReference;
pub use trail::Checkpoint;
pub(crate) use trail::Trail;

/// The outcome of running the search loop until it stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CSPSolverExecutionFlag {
    /// A solution was found; the search can be resumed to look for the next one.
    Feasible,
    /// The search space has been exhausted.
    Infeasible,
    /// A termination condition stopped the search.
    Timeout,
}

#[cfg(test)]
pub(crate) mod tests {
    pub(crate) use super::random::tests::TestRandom;
}
