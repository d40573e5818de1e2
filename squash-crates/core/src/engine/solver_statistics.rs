use crate::create_statistics_struct;

create_statistics_struct!(
    /// The measures of the search, updated by the [`ConstraintSatisfactionSolver`] and read through
    /// [`Solver::measures`].
    ///
    /// The counters accumulate over all searches performed by the same solver.
    Measures {
        /// The number of decisions applied by the search
        num_nodes: u64,
        /// The number of search nodes which ended in a contradiction
        num_fails: u64,
        /// The number of times the search undid a decision to continue elsewhere
        num_backtracks: u64,
        /// The number of solutions encountered
        num_solutions: u64,
        /// The largest number of decisions on the search stack
        peak_depth: u64,
        /// The amount of time spent in the search loop, in milliseconds
        time_spent_in_solver_ms: u64,
});

#[cfg(doc)]
use crate::engine::ConstraintSatisfactionSolver;
#[cfg(doc)]
use crate::Solver;
